use super::super::table::RotOp;
use super::super::{Bus, Cpu, Flag};

impl Cpu {
    /// RLCA/RRCA/RLA/RRA.
    ///
    /// Unlike the CB-prefixed rotates, the accumulator rotates always
    /// clear Z (and N/H); C receives the rotated-out bit.
    pub(super) fn exec_rotate_a(&mut self, rot: RotOp) {
        let a = self.regs.a;
        let carry_in = self.flag(Flag::C) as u8;

        let (result, carry_out) = match rot {
            RotOp::Rlca => (a.rotate_left(1), a & 0x80 != 0),
            RotOp::Rrca => (a.rotate_right(1), a & 0x01 != 0),
            RotOp::Rla => ((a << 1) | carry_in, a & 0x80 != 0),
            RotOp::Rra => ((a >> 1) | (carry_in << 7), a & 0x01 != 0),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
    }

    /// CPL: complement A. Z and C are unaffected.
    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    /// SCF: set carry. Z is unaffected.
    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
    }

    /// CCF: complement carry. Z is unaffected.
    pub(super) fn exec_ccf(&mut self) {
        let carry = self.flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
    }

    /// ADD SP, r8.
    pub(super) fn exec_add_sp_imm<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
    }
}

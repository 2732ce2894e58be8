use super::super::table::{IndAddr, Reg16, Reg8};
use super::super::{Bus, Cpu};

impl Cpu {
    /// LD dst, src over the 8-bit operand set.
    pub(super) fn exec_ld_rr<B: Bus>(&mut self, bus: &mut B, dst: Reg8, src: Reg8) {
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
    }

    /// LD r, d8 (and LD (HL), d8).
    pub(super) fn exec_ld_r_imm<B: Bus>(&mut self, bus: &mut B, dst: Reg8) {
        let value = self.fetch8(bus);
        self.write_reg8(bus, dst, value);
    }

    /// LD rr, d16.
    pub(super) fn exec_ld16_imm<B: Bus>(&mut self, bus: &mut B, reg: Reg16) {
        let value = self.fetch16(bus);
        self.set_reg16(reg, value);
    }

    /// LD (BC/DE/HL±), A.
    pub(super) fn exec_ld_ind_a<B: Bus>(&mut self, bus: &mut B, ind: IndAddr) {
        let addr = self.indirect_addr(ind);
        bus.write_byte(addr, self.regs.a);
    }

    /// LD A, (BC/DE/HL±).
    pub(super) fn exec_ld_a_ind<B: Bus>(&mut self, bus: &mut B, ind: IndAddr) {
        let addr = self.indirect_addr(ind);
        self.regs.a = bus.read_byte(addr);
    }

    /// LD (a16), SP.
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write_word(addr, self.regs.sp);
    }

    /// LDH (a8), A: write A to the high page at 0xFF00+a8.
    pub(super) fn exec_ldh_imm_a<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        bus.write_byte(0xFF00 | u16::from(offset), self.regs.a);
    }

    /// LDH A, (a8).
    pub(super) fn exec_ldh_a_imm<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        self.regs.a = bus.read_byte(0xFF00 | u16::from(offset));
    }

    /// LD (0xFF00+C), A.
    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) {
        bus.write_byte(0xFF00 | u16::from(self.regs.c), self.regs.a);
    }

    /// LD A, (0xFF00+C).
    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) {
        self.regs.a = bus.read_byte(0xFF00 | u16::from(self.regs.c));
    }

    /// LD (a16), A.
    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write_byte(addr, self.regs.a);
    }

    /// LD A, (a16).
    pub(super) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read_byte(addr);
    }

    /// LD HL, SP+r8.
    pub(super) fn exec_ld_hl_sp_imm<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }
}

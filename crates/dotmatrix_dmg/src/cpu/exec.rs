mod alu;
mod control;
mod incdec;
mod ld;
mod stack;

use super::table::Opcode;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute a decoded opcode and return its machine-cycle cost.
    ///
    /// `base` is the opcode's entry in `BASE_CYCLES`; straight-line
    /// instructions return it unchanged, conditional control flow returns
    /// the larger taken cost when the branch is followed.
    pub(super) fn exec<B: Bus>(&mut self, bus: &mut B, op: Opcode, base: u8) -> u8 {
        match op {
            Opcode::Nop => base,

            // HALT and STOP are simplified to a plain PC advance: no
            // low-power state is modelled and nothing would wake it, since
            // interrupt dispatch does not exist in this core. STOP's
            // padding byte is not consumed.
            Opcode::Halt | Opcode::Stop => base,

            // EI/DI only toggle the enable flip-flop; interrupts are
            // configuration here, never serviced, so EI's one-instruction
            // enable delay is irrelevant and not modelled.
            Opcode::Ei => {
                self.ime = true;
                base
            }
            Opcode::Di => {
                self.ime = false;
                base
            }

            Opcode::LdRr(dst, src) => {
                self.exec_ld_rr(bus, dst, src);
                base
            }
            Opcode::LdRImm(dst) => {
                self.exec_ld_r_imm(bus, dst);
                base
            }
            Opcode::Ld16Imm(reg) => {
                self.exec_ld16_imm(bus, reg);
                base
            }
            Opcode::LdIndA(ind) => {
                self.exec_ld_ind_a(bus, ind);
                base
            }
            Opcode::LdAInd(ind) => {
                self.exec_ld_a_ind(bus, ind);
                base
            }
            Opcode::LdA16Sp => {
                self.exec_ld_a16_sp(bus);
                base
            }
            Opcode::LdhImmA => {
                self.exec_ldh_imm_a(bus);
                base
            }
            Opcode::LdhAImm => {
                self.exec_ldh_a_imm(bus);
                base
            }
            Opcode::LdhCA => {
                self.exec_ldh_c_a(bus);
                base
            }
            Opcode::LdhAC => {
                self.exec_ldh_a_c(bus);
                base
            }
            Opcode::LdA16A => {
                self.exec_ld_a16_a(bus);
                base
            }
            Opcode::LdAA16 => {
                self.exec_ld_a_a16(bus);
                base
            }
            Opcode::LdSpHl => {
                self.regs.sp = self.regs.hl();
                base
            }
            Opcode::LdHlSpImm => {
                self.exec_ld_hl_sp_imm(bus);
                base
            }
            Opcode::AddSpImm => {
                self.exec_add_sp_imm(bus);
                base
            }

            Opcode::Inc8(reg) => {
                self.exec_inc8(bus, reg);
                base
            }
            Opcode::Dec8(reg) => {
                self.exec_dec8(bus, reg);
                base
            }
            Opcode::Inc16(reg) => {
                self.exec_inc16(reg);
                base
            }
            Opcode::Dec16(reg) => {
                self.exec_dec16(reg);
                base
            }
            Opcode::AddHl(reg) => {
                self.alu_add16_hl(self.reg16(reg));
                base
            }

            Opcode::Alu(op, reg) => {
                let value = self.read_reg8(bus, reg);
                self.alu_apply(op, value);
                base
            }
            Opcode::AluImm(op) => {
                let value = self.fetch8(bus);
                self.alu_apply(op, value);
                base
            }

            Opcode::RotateA(rot) => {
                self.exec_rotate_a(rot);
                base
            }
            Opcode::Daa => {
                self.alu_daa();
                base
            }
            Opcode::Cpl => {
                self.exec_cpl();
                base
            }
            Opcode::Scf => {
                self.exec_scf();
                base
            }
            Opcode::Ccf => {
                self.exec_ccf();
                base
            }

            Opcode::Jr(cond) => self.exec_jr(bus, cond, base),
            Opcode::Jp(cond) => self.exec_jp(bus, cond, base),
            Opcode::JpHl => {
                self.regs.pc = self.regs.hl();
                base
            }
            Opcode::Call(cond) => self.exec_call(bus, cond, base),
            Opcode::Ret(cond) => self.exec_ret(bus, cond, base),
            Opcode::Reti => {
                self.exec_reti(bus);
                base
            }
            Opcode::Rst(vector) => {
                self.exec_rst(bus, vector);
                base
            }

            Opcode::Push(reg) => {
                self.exec_push(bus, reg);
                base
            }
            Opcode::Pop(reg) => {
                self.exec_pop(bus, reg);
                base
            }

            // Resolved in `step` before decode reaches here.
            Opcode::Prefix | Opcode::Illegal => base,
        }
    }
}

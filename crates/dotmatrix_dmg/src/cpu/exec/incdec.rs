use super::super::table::{Reg16, Reg8};
use super::super::{Bus, Cpu};

impl Cpu {
    /// INC r / INC (HL).
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) {
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, reg, result);
    }

    /// DEC r / DEC (HL).
    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) {
        let value = self.read_reg8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, reg, result);
    }

    /// INC rr. No flags.
    pub(super) fn exec_inc16(&mut self, reg: Reg16) {
        let value = self.reg16(reg);
        self.set_reg16(reg, value.wrapping_add(1));
    }

    /// DEC rr. No flags.
    pub(super) fn exec_dec16(&mut self, reg: Reg16) {
        let value = self.reg16(reg);
        self.set_reg16(reg, value.wrapping_sub(1));
    }
}

use super::super::table::StackReg;
use super::super::{Bus, Cpu};

impl Cpu {
    /// PUSH rr.
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, reg: StackReg) {
        let value = self.stack_reg(reg);
        self.push_u16(bus, value);
    }

    /// POP rr. POP AF masks the low nibble of the restored F to zero.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, reg: StackReg) {
        let value = self.pop_u16(bus);
        self.set_stack_reg(reg, value);
    }
}

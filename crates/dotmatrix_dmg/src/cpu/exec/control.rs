use super::super::table::{
    Cond, CALL_TAKEN_EXTRA, JP_TAKEN_EXTRA, JR_TAKEN_EXTRA, RET_TAKEN_EXTRA,
};
use super::super::{Bus, Cpu};

/// Taken-path cost for a conditional branch. The unconditional variants
/// already carry the full cost in their base table entry.
#[inline]
fn taken_cost(cond: Cond, base: u8, extra: u8) -> u8 {
    match cond {
        Cond::Always => base,
        _ => base + extra,
    }
}

impl Cpu {
    /// JR [cc,] r8: relative jump, signed displacement from the address
    /// following the operand.
    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B, cond: Cond, base: u8) -> u8 {
        let offset = self.fetch8(bus) as i8;
        if self.cond_met(cond) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            taken_cost(cond, base, JR_TAKEN_EXTRA)
        } else {
            base
        }
    }

    /// JP [cc,] a16.
    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B, cond: Cond, base: u8) -> u8 {
        let addr = self.fetch16(bus);
        if self.cond_met(cond) {
            self.regs.pc = addr;
            taken_cost(cond, base, JP_TAKEN_EXTRA)
        } else {
            base
        }
    }

    /// CALL [cc,] a16.
    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Cond, base: u8) -> u8 {
        let addr = self.fetch16(bus);
        if self.cond_met(cond) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            taken_cost(cond, base, CALL_TAKEN_EXTRA)
        } else {
            base
        }
    }

    /// RET [cc].
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Cond, base: u8) -> u8 {
        if self.cond_met(cond) {
            self.regs.pc = self.pop_u16(bus);
            taken_cost(cond, base, RET_TAKEN_EXTRA)
        } else {
            base
        }
    }

    /// RETI: return and set IME.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
    }

    /// RST: push PC and jump to a fixed zero-page vector.
    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(vector);
    }
}

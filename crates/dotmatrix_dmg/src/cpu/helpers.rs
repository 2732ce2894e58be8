use super::table::{Cond, IndAddr, Reg16, Reg8, StackReg};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Read an 8-bit operand; `Reg8::HlInd` reads memory at HL.
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&self, bus: &B, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlInd => bus.read_byte(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    /// Write an 8-bit operand; `Reg8::HlInd` writes memory at HL.
    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlInd => bus.write_byte(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn set_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn stack_reg(&self, reg: StackReg) -> u16 {
        match reg {
            StackReg::BC => self.regs.bc(),
            StackReg::DE => self.regs.de(),
            StackReg::HL => self.regs.hl(),
            StackReg::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn set_stack_reg(&mut self, reg: StackReg, value: u16) {
        match reg {
            StackReg::BC => self.regs.set_bc(value),
            StackReg::DE => self.regs.set_de(value),
            StackReg::HL => self.regs.set_hl(value),
            // POP AF: the low nibble of F is forced to zero.
            StackReg::AF => self.regs.set_af(value),
        }
    }

    /// Resolve an indirect address, applying the HL post-increment or
    /// post-decrement where the mode calls for it.
    #[inline]
    pub(super) fn indirect_addr(&mut self, ind: IndAddr) -> u16 {
        match ind {
            IndAddr::BC => self.regs.bc(),
            IndAddr::DE => self.regs.de(),
            IndAddr::HlInc => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_add(1));
                addr
            }
            IndAddr::HlDec => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_sub(1));
                addr
            }
        }
    }

    #[inline]
    pub(super) fn cond_met(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::NZ => !self.flag(Flag::Z),
            Cond::Z => self.flag(Flag::Z),
            Cond::NC => !self.flag(Flag::C),
            Cond::C => self.flag(Flag::C),
        }
    }

    /// Fetch the byte at PC and advance PC.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a 16-bit immediate at PC, low byte first.
    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Push a 16-bit value onto the descending stack, high byte first, so
    /// that memory[SP] holds the low byte and memory[SP+1] the high byte.
    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write_byte(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write_byte(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read_byte(self.regs.sp);
        let hi = bus.read_byte(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }
}

mod alu;
mod cb;
mod exec;
mod helpers;
mod regs;
mod table;

#[cfg(test)]
mod tests;

use std::fmt;

pub use regs::{Flag, Registers};
pub use table::{Opcode, BASE_CYCLES, OPCODES};

/// Abstraction over the memory bus the CPU executes against.
///
/// Reads have no side effects in this model (no PPU/timer/DMA callbacks),
/// so they take `&self`; this also lets the renderer share a bus reference
/// with the host loop.
///
/// Word accesses are composed from two byte accesses, low byte first
/// (little-endian), matching the hardware bus behaviour.
pub trait Bus {
    fn read_byte(&self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);

    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }
}

/// Fault raised by [`Cpu::step`].
///
/// Executing an undefined instruction would leave the machine in an
/// architecturally meaningless state, so the fault is always surfaced to the
/// host rather than recovered silently. The host decides whether to abort or
/// keep the machine frozen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepError {
    /// The fetched opcode byte has no defined handler. PC has advanced past
    /// the fetched byte; no other architectural state was touched.
    UnknownOpcode { opcode: u8 },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::UnknownOpcode { opcode } => {
                write!(f, "unknown opcode 0x{opcode:02X}")
            }
        }
    }
}

impl std::error::Error for StepError {}

/// Game Boy CPU core.
///
/// One instance per emulated machine. Each call to [`Cpu::step`] executes a
/// single instruction atomically against the supplied bus and accounts its
/// machine-cycle cost into `cycles`, which the host uses to pace the
/// renderer and timers.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable flip-flop. EI/DI toggle it; no interrupt
    /// dispatch is modelled, so this is pure configuration state.
    pub ime: bool,
    /// Monotonic machine-cycle counter (1 machine cycle = 4 T-cycles).
    pub cycles: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            cycles: 0,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.cycles = 0;
        self.apply_dmg_boot_state();
    }

    /// Registers as the DMG boot ROM leaves them when it hands control to
    /// cartridge code at 0x0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        (self.regs.f & (1 << flag as u8)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= 1 << flag as u8;
        } else {
            self.regs.f &= !(1 << flag as u8);
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Execute one instruction and return its machine-cycle cost.
    ///
    /// The opcode is fetched at PC (PC advances past every fetched byte),
    /// decoded through the static instruction table (or through the CB
    /// decoder after a 0xCB prefix), and executed. The returned cost is
    /// also accumulated into `cycles`. Conditional control flow reports the
    /// taken cost when the branch is followed.
    ///
    /// An undefined primary opcode fails with [`StepError::UnknownOpcode`];
    /// PC is then advanced only past the offending byte and `cycles` is
    /// unchanged.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u8, StepError> {
        let opcode = self.fetch8(bus);
        let base = BASE_CYCLES[opcode as usize];

        let cost = match OPCODES[opcode as usize] {
            Opcode::Prefix => {
                let cb = self.fetch8(bus);
                self.exec_cb(bus, cb)
            }
            Opcode::Illegal => return Err(StepError::UnknownOpcode { opcode }),
            op => self.exec(bus, op, base),
        };

        self.cycles += u64::from(cost);
        Ok(cost)
    }

    /// One-line register/flag dump for tracing.
    ///
    /// Format: `AF:01B0 BC:0013 DE:00D8 HL:014D  PC:0100 SP:FFFE  F:Z-HC`,
    /// with unset flags shown as dashes.
    pub fn dump(&self) -> String {
        format!(
            "AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X}  PC:{:04X} SP:{:04X}  F:{}{}{}{}",
            self.regs.af(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            self.regs.pc,
            self.regs.sp,
            if self.flag(Flag::Z) { 'Z' } else { '-' },
            if self.flag(Flag::N) { 'N' } else { '-' },
            if self.flag(Flag::H) { 'H' } else { '-' },
            if self.flag(Flag::C) { 'C' } else { '-' },
        )
    }
}

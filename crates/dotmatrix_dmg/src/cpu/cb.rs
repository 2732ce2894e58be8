//! CB-prefixed instruction decoding and execution.
//!
//! The 256 extended opcodes are not tabulated individually: each byte
//! decomposes into an operation class (top two bits), a bit index (middle
//! three bits, for BIT/RES/SET), and an operand selector (low three bits).
//! One generic handler per class covers the whole space, so the CB decoder
//! is total; there are no illegal CB opcodes.

use super::table::Reg8;
use super::{Bus, Cpu, Flag};

/// Decoded CB operation class.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum CbOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit(u8),
    Res(u8),
    Set(u8),
}

/// Decompose a CB opcode byte into its operation and operand.
pub(super) fn decode_cb(byte: u8) -> (CbOp, Reg8) {
    let bit = (byte >> 3) & 0x07;
    let target = Reg8::from_index(byte);

    let op = match byte >> 6 {
        0 => match bit {
            0 => CbOp::Rlc,
            1 => CbOp::Rrc,
            2 => CbOp::Rl,
            3 => CbOp::Rr,
            4 => CbOp::Sla,
            5 => CbOp::Sra,
            6 => CbOp::Swap,
            _ => CbOp::Srl,
        },
        1 => CbOp::Bit(bit),
        2 => CbOp::Res(bit),
        _ => CbOp::Set(bit),
    };

    (op, target)
}

// Machine-cycle costs including the prefix fetch. BIT only reads its
// memory operand, so its (HL) form is one cycle cheaper than the
// read-modify-write forms.
const CB_REG_MCYCLES: u8 = 2;
const CB_HL_RMW_MCYCLES: u8 = 4;
const CB_HL_BIT_MCYCLES: u8 = 3;

impl Cpu {
    /// Execute a CB-prefixed instruction and return its machine-cycle cost.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, byte: u8) -> u8 {
        let (op, target) = decode_cb(byte);
        let is_mem = target == Reg8::HlInd;

        match op {
            CbOp::Bit(bit) => {
                let value = self.read_reg8(bus, target);
                self.set_flag(Flag::Z, value & (1 << bit) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
                if is_mem {
                    CB_HL_BIT_MCYCLES
                } else {
                    CB_REG_MCYCLES
                }
            }
            CbOp::Res(bit) => {
                let value = self.read_reg8(bus, target);
                self.write_reg8(bus, target, value & !(1 << bit));
                if is_mem {
                    CB_HL_RMW_MCYCLES
                } else {
                    CB_REG_MCYCLES
                }
            }
            CbOp::Set(bit) => {
                let value = self.read_reg8(bus, target);
                self.write_reg8(bus, target, value | (1 << bit));
                if is_mem {
                    CB_HL_RMW_MCYCLES
                } else {
                    CB_REG_MCYCLES
                }
            }
            _ => {
                let value = self.read_reg8(bus, target);
                let result = self.rotate_shift(op, value);
                self.write_reg8(bus, target, result);
                if is_mem {
                    CB_HL_RMW_MCYCLES
                } else {
                    CB_REG_MCYCLES
                }
            }
        }
    }

    /// Shared rotate/shift/swap core for the CB group.
    ///
    /// All of these set Z from the result (unlike RLCA and friends) and
    /// set C to the shifted-out bit, except SWAP which clears C.
    fn rotate_shift(&mut self, op: CbOp, value: u8) -> u8 {
        let carry_in = self.flag(Flag::C) as u8;

        let (result, carry_out) = match op {
            CbOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            CbOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            CbOp::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            CbOp::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            CbOp::Sla => (value << 1, value & 0x80 != 0),
            // SRA keeps the sign bit.
            CbOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            CbOp::Swap => (value.rotate_left(4), false),
            CbOp::Srl => (value >> 1, value & 0x01 != 0),
            // BIT/RES/SET never reach here.
            CbOp::Bit(_) | CbOp::Res(_) | CbOp::Set(_) => (value, false),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry_out);
        result
    }
}

//! Static instruction table for the primary (unprefixed) opcode space.
//!
//! Every opcode byte maps to a decoded [`Opcode`] description and, in the
//! parallel [`BASE_CYCLES`] table, to its machine-cycle cost. Conditional
//! control-flow entries hold the not-taken cost; the execute path adds the
//! extra bus cycles of the taken path (see the `*_TAKEN_EXTRA` constants).
//! The 11 holes in the opcode space are `Illegal` with a cost of 0.

/// 8-bit operand selector in standard opcode-table order.
///
/// `HlInd` is the memory operand addressed by HL.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlInd,
    A,
}

impl Reg8 {
    /// Operand selector from the low three bits of an opcode
    /// (0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A).
    #[inline]
    pub const fn from_index(index: u8) -> Reg8 {
        match index & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlInd,
            _ => Reg8::A,
        }
    }
}

/// 16-bit register pair selector for loads, INC/DEC, and ADD HL.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

/// 16-bit register pair selector for PUSH/POP (AF instead of SP).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StackReg {
    BC,
    DE,
    HL,
    AF,
}

/// Branch condition for JR/JP/CALL/RET.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cond {
    Always,
    NZ,
    Z,
    NC,
    C,
}

/// 8-bit accumulator ALU operation class.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// Unprefixed accumulator rotates. Unlike the CB-prefixed rotate group,
/// these always clear Z.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RotOp {
    Rlca,
    Rrca,
    Rla,
    Rra,
}

/// Indirect addressing mode for `LD (rr),A` / `LD A,(rr)`.
///
/// The HL variants post-increment/decrement HL.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndAddr {
    BC,
    DE,
    HlInc,
    HlDec,
}

/// Decoded primary opcode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Opcode {
    Nop,
    Stop,
    Halt,
    /// LD dst, src over the 8-bit operand set (covers 0x40–0x7F).
    LdRr(Reg8, Reg8),
    /// LD r, d8 (and LD (HL), d8).
    LdRImm(Reg8),
    /// LD rr, d16.
    Ld16Imm(Reg16),
    /// LD (BC/DE/HL±), A.
    LdIndA(IndAddr),
    /// LD A, (BC/DE/HL±).
    LdAInd(IndAddr),
    /// LD (a16), SP.
    LdA16Sp,
    /// LDH (a8), A.
    LdhImmA,
    /// LDH A, (a8).
    LdhAImm,
    /// LD (0xFF00+C), A.
    LdhCA,
    /// LD A, (0xFF00+C).
    LdhAC,
    /// LD (a16), A.
    LdA16A,
    /// LD A, (a16).
    LdAA16,
    LdSpHl,
    /// LD HL, SP+r8.
    LdHlSpImm,
    /// ADD SP, r8.
    AddSpImm,
    Inc8(Reg8),
    Dec8(Reg8),
    Inc16(Reg16),
    Dec16(Reg16),
    /// ADD HL, rr.
    AddHl(Reg16),
    Alu(AluOp, Reg8),
    AluImm(AluOp),
    RotateA(RotOp),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jr(Cond),
    Jp(Cond),
    JpHl,
    Call(Cond),
    Ret(Cond),
    Reti,
    Push(StackReg),
    Pop(StackReg),
    /// RST: call to a fixed zero-page vector.
    Rst(u8),
    Di,
    Ei,
    /// 0xCB: the next byte selects an extended bit/rotate operation.
    Prefix,
    /// Opcode hole; fetching one raises `StepError::UnknownOpcode`.
    Illegal,
}

/// Extra machine cycles consumed when a conditional branch is taken.
pub(super) const JR_TAKEN_EXTRA: u8 = 1;
pub(super) const JP_TAKEN_EXTRA: u8 = 1;
pub(super) const CALL_TAKEN_EXTRA: u8 = 3;
pub(super) const RET_TAKEN_EXTRA: u8 = 3;

use Opcode::*;

/// The primary instruction table, indexed by opcode byte.
pub const OPCODES: [Opcode; 256] = [
    Nop,                            // 0x00 NOP
    Ld16Imm(Reg16::BC),             // 0x01 LD BC,d16
    LdIndA(IndAddr::BC),            // 0x02 LD (BC),A
    Inc16(Reg16::BC),               // 0x03 INC BC
    Inc8(Reg8::B),                  // 0x04 INC B
    Dec8(Reg8::B),                  // 0x05 DEC B
    LdRImm(Reg8::B),                // 0x06 LD B,d8
    RotateA(RotOp::Rlca),           // 0x07 RLCA
    LdA16Sp,                        // 0x08 LD (a16),SP
    AddHl(Reg16::BC),               // 0x09 ADD HL,BC
    LdAInd(IndAddr::BC),            // 0x0A LD A,(BC)
    Dec16(Reg16::BC),               // 0x0B DEC BC
    Inc8(Reg8::C),                  // 0x0C INC C
    Dec8(Reg8::C),                  // 0x0D DEC C
    LdRImm(Reg8::C),                // 0x0E LD C,d8
    RotateA(RotOp::Rrca),           // 0x0F RRCA
    Stop,                           // 0x10 STOP
    Ld16Imm(Reg16::DE),             // 0x11 LD DE,d16
    LdIndA(IndAddr::DE),            // 0x12 LD (DE),A
    Inc16(Reg16::DE),               // 0x13 INC DE
    Inc8(Reg8::D),                  // 0x14 INC D
    Dec8(Reg8::D),                  // 0x15 DEC D
    LdRImm(Reg8::D),                // 0x16 LD D,d8
    RotateA(RotOp::Rla),            // 0x17 RLA
    Jr(Cond::Always),               // 0x18 JR r8
    AddHl(Reg16::DE),               // 0x19 ADD HL,DE
    LdAInd(IndAddr::DE),            // 0x1A LD A,(DE)
    Dec16(Reg16::DE),               // 0x1B DEC DE
    Inc8(Reg8::E),                  // 0x1C INC E
    Dec8(Reg8::E),                  // 0x1D DEC E
    LdRImm(Reg8::E),                // 0x1E LD E,d8
    RotateA(RotOp::Rra),            // 0x1F RRA
    Jr(Cond::NZ),                   // 0x20 JR NZ,r8
    Ld16Imm(Reg16::HL),             // 0x21 LD HL,d16
    LdIndA(IndAddr::HlInc),         // 0x22 LD (HL+),A
    Inc16(Reg16::HL),               // 0x23 INC HL
    Inc8(Reg8::H),                  // 0x24 INC H
    Dec8(Reg8::H),                  // 0x25 DEC H
    LdRImm(Reg8::H),                // 0x26 LD H,d8
    Daa,                            // 0x27 DAA
    Jr(Cond::Z),                    // 0x28 JR Z,r8
    AddHl(Reg16::HL),               // 0x29 ADD HL,HL
    LdAInd(IndAddr::HlInc),         // 0x2A LD A,(HL+)
    Dec16(Reg16::HL),               // 0x2B DEC HL
    Inc8(Reg8::L),                  // 0x2C INC L
    Dec8(Reg8::L),                  // 0x2D DEC L
    LdRImm(Reg8::L),                // 0x2E LD L,d8
    Cpl,                            // 0x2F CPL
    Jr(Cond::NC),                   // 0x30 JR NC,r8
    Ld16Imm(Reg16::SP),             // 0x31 LD SP,d16
    LdIndA(IndAddr::HlDec),         // 0x32 LD (HL-),A
    Inc16(Reg16::SP),               // 0x33 INC SP
    Inc8(Reg8::HlInd),              // 0x34 INC (HL)
    Dec8(Reg8::HlInd),              // 0x35 DEC (HL)
    LdRImm(Reg8::HlInd),            // 0x36 LD (HL),d8
    Scf,                            // 0x37 SCF
    Jr(Cond::C),                    // 0x38 JR C,r8
    AddHl(Reg16::SP),               // 0x39 ADD HL,SP
    LdAInd(IndAddr::HlDec),         // 0x3A LD A,(HL-)
    Dec16(Reg16::SP),               // 0x3B DEC SP
    Inc8(Reg8::A),                  // 0x3C INC A
    Dec8(Reg8::A),                  // 0x3D DEC A
    LdRImm(Reg8::A),                // 0x3E LD A,d8
    Ccf,                            // 0x3F CCF
    // 0x40–0x7F: LD dst,src over B,C,D,E,H,L,(HL),A, with HALT at 0x76.
    LdRr(Reg8::B, Reg8::B),         // 0x40
    LdRr(Reg8::B, Reg8::C),         // 0x41
    LdRr(Reg8::B, Reg8::D),         // 0x42
    LdRr(Reg8::B, Reg8::E),         // 0x43
    LdRr(Reg8::B, Reg8::H),         // 0x44
    LdRr(Reg8::B, Reg8::L),         // 0x45
    LdRr(Reg8::B, Reg8::HlInd),     // 0x46
    LdRr(Reg8::B, Reg8::A),         // 0x47
    LdRr(Reg8::C, Reg8::B),         // 0x48
    LdRr(Reg8::C, Reg8::C),         // 0x49
    LdRr(Reg8::C, Reg8::D),         // 0x4A
    LdRr(Reg8::C, Reg8::E),         // 0x4B
    LdRr(Reg8::C, Reg8::H),         // 0x4C
    LdRr(Reg8::C, Reg8::L),         // 0x4D
    LdRr(Reg8::C, Reg8::HlInd),     // 0x4E
    LdRr(Reg8::C, Reg8::A),         // 0x4F
    LdRr(Reg8::D, Reg8::B),         // 0x50
    LdRr(Reg8::D, Reg8::C),         // 0x51
    LdRr(Reg8::D, Reg8::D),         // 0x52
    LdRr(Reg8::D, Reg8::E),         // 0x53
    LdRr(Reg8::D, Reg8::H),         // 0x54
    LdRr(Reg8::D, Reg8::L),         // 0x55
    LdRr(Reg8::D, Reg8::HlInd),     // 0x56
    LdRr(Reg8::D, Reg8::A),         // 0x57
    LdRr(Reg8::E, Reg8::B),         // 0x58
    LdRr(Reg8::E, Reg8::C),         // 0x59
    LdRr(Reg8::E, Reg8::D),         // 0x5A
    LdRr(Reg8::E, Reg8::E),         // 0x5B
    LdRr(Reg8::E, Reg8::H),         // 0x5C
    LdRr(Reg8::E, Reg8::L),         // 0x5D
    LdRr(Reg8::E, Reg8::HlInd),     // 0x5E
    LdRr(Reg8::E, Reg8::A),         // 0x5F
    LdRr(Reg8::H, Reg8::B),         // 0x60
    LdRr(Reg8::H, Reg8::C),         // 0x61
    LdRr(Reg8::H, Reg8::D),         // 0x62
    LdRr(Reg8::H, Reg8::E),         // 0x63
    LdRr(Reg8::H, Reg8::H),         // 0x64
    LdRr(Reg8::H, Reg8::L),         // 0x65
    LdRr(Reg8::H, Reg8::HlInd),     // 0x66
    LdRr(Reg8::H, Reg8::A),         // 0x67
    LdRr(Reg8::L, Reg8::B),         // 0x68
    LdRr(Reg8::L, Reg8::C),         // 0x69
    LdRr(Reg8::L, Reg8::D),         // 0x6A
    LdRr(Reg8::L, Reg8::E),         // 0x6B
    LdRr(Reg8::L, Reg8::H),         // 0x6C
    LdRr(Reg8::L, Reg8::L),         // 0x6D
    LdRr(Reg8::L, Reg8::HlInd),     // 0x6E
    LdRr(Reg8::L, Reg8::A),         // 0x6F
    LdRr(Reg8::HlInd, Reg8::B),     // 0x70
    LdRr(Reg8::HlInd, Reg8::C),     // 0x71
    LdRr(Reg8::HlInd, Reg8::D),     // 0x72
    LdRr(Reg8::HlInd, Reg8::E),     // 0x73
    LdRr(Reg8::HlInd, Reg8::H),     // 0x74
    LdRr(Reg8::HlInd, Reg8::L),     // 0x75
    Halt,                           // 0x76 HALT
    LdRr(Reg8::HlInd, Reg8::A),     // 0x77
    LdRr(Reg8::A, Reg8::B),         // 0x78
    LdRr(Reg8::A, Reg8::C),         // 0x79
    LdRr(Reg8::A, Reg8::D),         // 0x7A
    LdRr(Reg8::A, Reg8::E),         // 0x7B
    LdRr(Reg8::A, Reg8::H),         // 0x7C
    LdRr(Reg8::A, Reg8::L),         // 0x7D
    LdRr(Reg8::A, Reg8::HlInd),     // 0x7E
    LdRr(Reg8::A, Reg8::A),         // 0x7F
    // 0x80–0xBF: ALU op on A over the same operand set.
    Alu(AluOp::Add, Reg8::B),       // 0x80
    Alu(AluOp::Add, Reg8::C),       // 0x81
    Alu(AluOp::Add, Reg8::D),       // 0x82
    Alu(AluOp::Add, Reg8::E),       // 0x83
    Alu(AluOp::Add, Reg8::H),       // 0x84
    Alu(AluOp::Add, Reg8::L),       // 0x85
    Alu(AluOp::Add, Reg8::HlInd),   // 0x86
    Alu(AluOp::Add, Reg8::A),       // 0x87
    Alu(AluOp::Adc, Reg8::B),       // 0x88
    Alu(AluOp::Adc, Reg8::C),       // 0x89
    Alu(AluOp::Adc, Reg8::D),       // 0x8A
    Alu(AluOp::Adc, Reg8::E),       // 0x8B
    Alu(AluOp::Adc, Reg8::H),       // 0x8C
    Alu(AluOp::Adc, Reg8::L),       // 0x8D
    Alu(AluOp::Adc, Reg8::HlInd),   // 0x8E
    Alu(AluOp::Adc, Reg8::A),       // 0x8F
    Alu(AluOp::Sub, Reg8::B),       // 0x90
    Alu(AluOp::Sub, Reg8::C),       // 0x91
    Alu(AluOp::Sub, Reg8::D),       // 0x92
    Alu(AluOp::Sub, Reg8::E),       // 0x93
    Alu(AluOp::Sub, Reg8::H),       // 0x94
    Alu(AluOp::Sub, Reg8::L),       // 0x95
    Alu(AluOp::Sub, Reg8::HlInd),   // 0x96
    Alu(AluOp::Sub, Reg8::A),       // 0x97
    Alu(AluOp::Sbc, Reg8::B),       // 0x98
    Alu(AluOp::Sbc, Reg8::C),       // 0x99
    Alu(AluOp::Sbc, Reg8::D),       // 0x9A
    Alu(AluOp::Sbc, Reg8::E),       // 0x9B
    Alu(AluOp::Sbc, Reg8::H),       // 0x9C
    Alu(AluOp::Sbc, Reg8::L),       // 0x9D
    Alu(AluOp::Sbc, Reg8::HlInd),   // 0x9E
    Alu(AluOp::Sbc, Reg8::A),       // 0x9F
    Alu(AluOp::And, Reg8::B),       // 0xA0
    Alu(AluOp::And, Reg8::C),       // 0xA1
    Alu(AluOp::And, Reg8::D),       // 0xA2
    Alu(AluOp::And, Reg8::E),       // 0xA3
    Alu(AluOp::And, Reg8::H),       // 0xA4
    Alu(AluOp::And, Reg8::L),       // 0xA5
    Alu(AluOp::And, Reg8::HlInd),   // 0xA6
    Alu(AluOp::And, Reg8::A),       // 0xA7
    Alu(AluOp::Xor, Reg8::B),       // 0xA8
    Alu(AluOp::Xor, Reg8::C),       // 0xA9
    Alu(AluOp::Xor, Reg8::D),       // 0xAA
    Alu(AluOp::Xor, Reg8::E),       // 0xAB
    Alu(AluOp::Xor, Reg8::H),       // 0xAC
    Alu(AluOp::Xor, Reg8::L),       // 0xAD
    Alu(AluOp::Xor, Reg8::HlInd),   // 0xAE
    Alu(AluOp::Xor, Reg8::A),       // 0xAF
    Alu(AluOp::Or, Reg8::B),        // 0xB0
    Alu(AluOp::Or, Reg8::C),        // 0xB1
    Alu(AluOp::Or, Reg8::D),        // 0xB2
    Alu(AluOp::Or, Reg8::E),        // 0xB3
    Alu(AluOp::Or, Reg8::H),        // 0xB4
    Alu(AluOp::Or, Reg8::L),        // 0xB5
    Alu(AluOp::Or, Reg8::HlInd),    // 0xB6
    Alu(AluOp::Or, Reg8::A),        // 0xB7
    Alu(AluOp::Cp, Reg8::B),        // 0xB8
    Alu(AluOp::Cp, Reg8::C),        // 0xB9
    Alu(AluOp::Cp, Reg8::D),        // 0xBA
    Alu(AluOp::Cp, Reg8::E),        // 0xBB
    Alu(AluOp::Cp, Reg8::H),        // 0xBC
    Alu(AluOp::Cp, Reg8::L),        // 0xBD
    Alu(AluOp::Cp, Reg8::HlInd),    // 0xBE
    Alu(AluOp::Cp, Reg8::A),        // 0xBF
    Ret(Cond::NZ),                  // 0xC0 RET NZ
    Pop(StackReg::BC),              // 0xC1 POP BC
    Jp(Cond::NZ),                   // 0xC2 JP NZ,a16
    Jp(Cond::Always),               // 0xC3 JP a16
    Call(Cond::NZ),                 // 0xC4 CALL NZ,a16
    Push(StackReg::BC),             // 0xC5 PUSH BC
    AluImm(AluOp::Add),             // 0xC6 ADD A,d8
    Rst(0x00),                      // 0xC7 RST 00H
    Ret(Cond::Z),                   // 0xC8 RET Z
    Ret(Cond::Always),              // 0xC9 RET
    Jp(Cond::Z),                    // 0xCA JP Z,a16
    Prefix,                         // 0xCB prefix
    Call(Cond::Z),                  // 0xCC CALL Z,a16
    Call(Cond::Always),             // 0xCD CALL a16
    AluImm(AluOp::Adc),             // 0xCE ADC A,d8
    Rst(0x08),                      // 0xCF RST 08H
    Ret(Cond::NC),                  // 0xD0 RET NC
    Pop(StackReg::DE),              // 0xD1 POP DE
    Jp(Cond::NC),                   // 0xD2 JP NC,a16
    Illegal,                        // 0xD3
    Call(Cond::NC),                 // 0xD4 CALL NC,a16
    Push(StackReg::DE),             // 0xD5 PUSH DE
    AluImm(AluOp::Sub),             // 0xD6 SUB d8
    Rst(0x10),                      // 0xD7 RST 10H
    Ret(Cond::C),                   // 0xD8 RET C
    Reti,                           // 0xD9 RETI
    Jp(Cond::C),                    // 0xDA JP C,a16
    Illegal,                        // 0xDB
    Call(Cond::C),                  // 0xDC CALL C,a16
    Illegal,                        // 0xDD
    AluImm(AluOp::Sbc),             // 0xDE SBC A,d8
    Rst(0x18),                      // 0xDF RST 18H
    LdhImmA,                        // 0xE0 LDH (a8),A
    Pop(StackReg::HL),              // 0xE1 POP HL
    LdhCA,                          // 0xE2 LD (C),A
    Illegal,                        // 0xE3
    Illegal,                        // 0xE4
    Push(StackReg::HL),             // 0xE5 PUSH HL
    AluImm(AluOp::And),             // 0xE6 AND d8
    Rst(0x20),                      // 0xE7 RST 20H
    AddSpImm,                       // 0xE8 ADD SP,r8
    JpHl,                           // 0xE9 JP HL
    LdA16A,                         // 0xEA LD (a16),A
    Illegal,                        // 0xEB
    Illegal,                        // 0xEC
    Illegal,                        // 0xED
    AluImm(AluOp::Xor),             // 0xEE XOR d8
    Rst(0x28),                      // 0xEF RST 28H
    LdhAImm,                        // 0xF0 LDH A,(a8)
    Pop(StackReg::AF),              // 0xF1 POP AF
    LdhAC,                          // 0xF2 LD A,(C)
    Di,                             // 0xF3 DI
    Illegal,                        // 0xF4
    Push(StackReg::AF),             // 0xF5 PUSH AF
    AluImm(AluOp::Or),              // 0xF6 OR d8
    Rst(0x30),                      // 0xF7 RST 30H
    LdHlSpImm,                      // 0xF8 LD HL,SP+r8
    LdSpHl,                         // 0xF9 LD SP,HL
    LdAA16,                         // 0xFA LD A,(a16)
    Ei,                             // 0xFB EI
    Illegal,                        // 0xFC
    Illegal,                        // 0xFD
    AluImm(AluOp::Cp),              // 0xFE CP d8
    Rst(0x38),                      // 0xFF RST 38H
];

/// Base machine-cycle costs per primary opcode.
///
/// Conditional JR/JP/CALL/RET entries hold the not-taken cost. The 0xCB
/// entry covers only the prefix fetch; the CB decoder reports the full
/// cost of the extended instruction. Illegal opcodes cost 0.
#[rustfmt::skip]
pub const BASE_CYCLES: [u8; 256] = [
    // 0x00
    1, 3, 2, 2, 1, 1, 2, 1, 5, 2, 2, 2, 1, 1, 2, 1,
    // 0x10
    1, 3, 2, 2, 1, 1, 2, 1, 3, 2, 2, 2, 1, 1, 2, 1,
    // 0x20
    2, 3, 2, 2, 1, 1, 2, 1, 2, 2, 2, 2, 1, 1, 2, 1,
    // 0x30
    2, 3, 2, 2, 3, 3, 3, 1, 2, 2, 2, 2, 1, 1, 2, 1,
    // 0x40
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0x50
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0x60
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0x70
    2, 2, 2, 2, 2, 2, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0x80
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0x90
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0xA0
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0xB0
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    // 0xC0
    2, 3, 3, 4, 3, 4, 2, 4, 2, 4, 3, 1, 3, 6, 2, 4,
    // 0xD0
    2, 3, 3, 0, 3, 4, 2, 4, 2, 4, 3, 0, 3, 0, 2, 4,
    // 0xE0
    3, 3, 2, 0, 0, 4, 2, 4, 4, 1, 4, 0, 0, 0, 2, 4,
    // 0xF0
    3, 3, 2, 1, 0, 4, 2, 4, 3, 2, 4, 1, 0, 0, 2, 4,
];

use super::*;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read_byte(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// Fresh CPU plus a bus with `program` placed at the boot entry point.
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let cpu = Cpu::new();
    let mut bus = TestBus::default();
    let start = cpu.regs.pc as usize;
    bus.memory[start..start + program.len()].copy_from_slice(program);
    (cpu, bus)
}

fn step_ok(cpu: &mut Cpu, bus: &mut TestBus) -> u8 {
    cpu.step(bus).unwrap()
}

#[test]
fn boot_state_matches_dmg() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
    assert_eq!(cpu.cycles, 0);
}

#[test]
fn reset_restores_boot_state() {
    let (mut cpu, mut bus) = setup(&[0x3E, 0xAA]);
    step_ok(&mut cpu, &mut bus);
    cpu.reset();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.cycles, 0);
}

#[test]
fn dump_format() {
    let cpu = Cpu::new();
    assert_eq!(
        cpu.dump(),
        "AF:01B0 BC:0013 DE:00D8 HL:014D  PC:0100 SP:FFFE  F:Z-HC"
    );
}

#[test]
fn pop_af_masks_low_flag_bits() {
    // POP AF
    let (mut cpu, mut bus) = setup(&[0xF1]);
    cpu.regs.sp = 0xC100;
    bus.memory[0xC100] = 0xFF; // F: low nibble must be discarded
    bus.memory[0xC101] = 0x12; // A
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.af(), 0x12F0);
    assert_eq!(cpu.regs.sp, 0xC102);
}

#[test]
fn ld_imm_and_add_sequence() {
    // LD A,0x05 / LD B,0x03 / ADD A,B
    let (mut cpu, mut bus) = setup(&[0x3E, 0x05, 0x06, 0x03, 0x80]);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.a, 0x08);
    assert_eq!(cpu.regs.f, 0);
    assert_eq!(cpu.regs.pc, 0x0105);
    assert_eq!(cpu.cycles, 5);
}

#[test]
fn ld_register_chain() {
    // LD B,0x12 / LD C,B / LD D,C / LD A,D
    let (mut cpu, mut bus) = setup(&[0x06, 0x12, 0x48, 0x51, 0x7A]);
    for _ in 0..4 {
        step_ok(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.d, 0x12);
}

#[test]
fn hl_indirect_read_modify_write() {
    // LD HL,0xC000 / LD (HL),0x10 / INC (HL) / DEC (HL) / LD A,(HL)
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0x36, 0x10, 0x34, 0x35, 0x7E]);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x11);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x10);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0x10);
}

#[test]
fn hl_inc_dec_indirect_loads() {
    // LD HL,0xC000 / LD (HL+),A / LD A,(HL-)
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0x22, 0x3A]);
    cpu.regs.a = 0x77;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(bus.memory[0xC000], 0x77);
    assert_eq!(cpu.regs.hl(), 0xC001);
    cpu.regs.a = 0;
    bus.memory[0xC001] = 0x55;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x55);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn inc8_half_carry_and_zero() {
    // INC A twice, carry must survive both
    let (mut cpu, mut bus) = setup(&[0x3C, 0x3C]);
    cpu.regs.f = 0;
    cpu.set_flag(Flag::C, true);
    cpu.regs.a = 0x0F;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.flag(Flag::H));
    assert!(!cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::C));

    cpu.regs.a = 0xFF;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::H));
    assert!(cpu.flag(Flag::C));
}

#[test]
fn dec8_flags() {
    // DEC A twice
    let (mut cpu, mut bus) = setup(&[0x3D, 0x3D]);
    cpu.regs.a = 0x10;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::H));
    assert!(!cpu.flag(Flag::Z));

    cpu.regs.a = 0x01;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::H));
}

#[test]
fn sub_and_compare_flags() {
    // SUB 0x20 then CP 0x00
    let (mut cpu, mut bus) = setup(&[0xD6, 0x20, 0xFE, 0x00]);
    cpu.regs.a = 0x10;
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0xF0);
    assert!(cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::C));
    assert!(!cpu.flag(Flag::H));

    step_ok(&mut cpu, &mut bus);
    // CP leaves A untouched
    assert_eq!(cpu.regs.a, 0xF0);
    assert!(!cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::N));
}

#[test]
fn adc_uses_carry_in() {
    // ADC A,B with carry set: 0xFF + 0x00 + 1
    let (mut cpu, mut bus) = setup(&[0x88]);
    cpu.regs.a = 0xFF;
    cpu.regs.b = 0x00;
    cpu.regs.f = 0;
    cpu.set_flag(Flag::C, true);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::H));
    assert!(cpu.flag(Flag::C));
}

#[test]
fn logic_ops_flags() {
    // AND B / XOR A
    let (mut cpu, mut bus) = setup(&[0xA0, 0xAF]);
    cpu.regs.a = 0xF0;
    cpu.regs.b = 0x0F;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::H));
    assert!(!cpu.flag(Flag::C));

    cpu.regs.a = 0x5A;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, 1 << Flag::Z as u8);
}

#[test]
fn add_hl_sets_half_carry_preserves_zero() {
    // ADD HL,BC
    let (mut cpu, mut bus) = setup(&[0x09]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.regs.f = 0;
    cpu.set_flag(Flag::Z, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.flag(Flag::H));
    assert!(!cpu.flag(Flag::C));
    assert!(!cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::Z));
}

#[test]
fn add_sp_signed_flags_from_low_byte() {
    // ADD SP,+8
    let (mut cpu, mut bus) = setup(&[0xE8, 0x08]);
    cpu.regs.sp = 0xFFF8;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert!(!cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::H));
    assert!(cpu.flag(Flag::C));
}

#[test]
fn ld_hl_sp_offset() {
    // LD HL,SP-2
    let (mut cpu, mut bus) = setup(&[0xF8, 0xFE]);
    cpu.regs.sp = 0xC000;
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.hl(), 0xBFFE);
    assert_eq!(cpu.regs.sp, 0xC000);
}

#[test]
fn ld_a16_sp_writes_little_endian() {
    // LD (0xC080),SP
    let (mut cpu, mut bus) = setup(&[0x08, 0x80, 0xC0]);
    cpu.regs.sp = 0xBEEF;
    assert_eq!(step_ok(&mut cpu, &mut bus), 5);
    assert_eq!(bus.memory[0xC080], 0xEF);
    assert_eq!(bus.memory[0xC081], 0xBE);
}

#[test]
fn ldh_immediate_and_c_offset() {
    // LDH (0x80),A / LDH A,(0x80) / LDH (C),A / LDH A,(C)
    let (mut cpu, mut bus) = setup(&[0xE0, 0x80, 0xF0, 0x80, 0xE2, 0xF2]);
    cpu.regs.a = 0x42;
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xFF80], 0x42);
    cpu.regs.a = 0;
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.a, 0x42);

    cpu.regs.c = 0x81;
    cpu.regs.a = 0x99;
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(bus.memory[0xFF81], 0x99);
    cpu.regs.a = 0;
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0x99);
}

#[test]
fn ld_absolute_round_trip() {
    // LD (0xC123),A / LD A,(0xC123)
    let (mut cpu, mut bus) = setup(&[0xEA, 0x23, 0xC1, 0x3E, 0x00, 0xFA, 0x23, 0xC1]);
    cpu.regs.a = 0x6E;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(bus.memory[0xC123], 0x6E);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x6E);
}

#[test]
fn push_pop_round_trip() {
    // PUSH BC / POP DE
    let (mut cpu, mut bus) = setup(&[0xC5, 0xD1]);
    cpu.regs.set_bc(0xABCD);
    cpu.regs.sp = 0xC200;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.sp, 0xC1FE);
    // Low byte lands at the final SP
    assert_eq!(bus.memory[0xC1FE], 0xCD);
    assert_eq!(bus.memory[0xC1FF], 0xAB);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.de(), 0xABCD);
    assert_eq!(cpu.regs.sp, 0xC200);
}

#[test]
fn jr_conditional_costs() {
    // JR NZ,+2 taken, then at target JR NZ not taken with Z set
    let (mut cpu, mut bus) = setup(&[0x20, 0x02]);
    cpu.set_flag(Flag::Z, false);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0104);

    bus.memory[0x0104] = 0x20;
    bus.memory[0x0105] = 0x10;
    cpu.set_flag(Flag::Z, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0106);
}

#[test]
fn jr_negative_offset() {
    // JR -2 loops back onto itself
    let (mut cpu, mut bus) = setup(&[0x18, 0xFE]);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn jp_and_jp_hl() {
    // JP 0x0200, then JP HL at the target
    let (mut cpu, mut bus) = setup(&[0xC3, 0x00, 0x02]);
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0200);

    bus.memory[0x0200] = 0xE9;
    cpu.regs.set_hl(0x0300);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0300);
}

#[test]
fn jp_conditional_not_taken() {
    // JP C,0x0200 with carry clear
    let (mut cpu, mut bus) = setup(&[0xDA, 0x00, 0x02]);
    cpu.set_flag(Flag::C, false);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn call_and_ret_round_trip() {
    // CALL 0x0200; RET at the target
    let (mut cpu, mut bus) = setup(&[0xCD, 0x00, 0x02]);
    cpu.regs.sp = 0xC200;
    assert_eq!(step_ok(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xC1FE);
    assert_eq!(bus.memory[0xC1FE], 0x03);
    assert_eq!(bus.memory[0xC1FF], 0x01);

    bus.memory[0x0200] = 0xC9;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xC200);
}

#[test]
fn conditional_ret_not_taken() {
    // RET NZ with Z set
    let (mut cpu, mut bus) = setup(&[0xC0]);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0101);
}

#[test]
fn rst_jumps_to_vector() {
    // RST 0x18
    let (mut cpu, mut bus) = setup(&[0xDF]);
    cpu.regs.sp = 0xC200;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0018);
    assert_eq!(bus.memory[0xC1FE], 0x01);
    assert_eq!(bus.memory[0xC1FF], 0x01);
}

#[test]
fn reti_sets_ime() {
    let (mut cpu, mut bus) = setup(&[0xD9]);
    cpu.regs.sp = 0xC1FE;
    bus.memory[0xC1FE] = 0x00;
    bus.memory[0xC1FF] = 0x02;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert!(cpu.ime);
}

#[test]
fn ei_di_toggle_ime() {
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3]);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert!(cpu.ime);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert!(!cpu.ime);
}

#[test]
fn rlca_clears_zero_cb_rlc_sets_it() {
    // RLCA with A=0x80, then CB RLC A with A=0
    let (mut cpu, mut bus) = setup(&[0x07, 0xCB, 0x07]);
    cpu.regs.a = 0x80;
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.flag(Flag::C));
    assert!(!cpu.flag(Flag::Z));

    cpu.regs.a = 0x00;
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert!(cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::C));
}

#[test]
fn rra_rotates_through_carry() {
    let (mut cpu, mut bus) = setup(&[0x1F]);
    cpu.regs.a = 0x01;
    cpu.regs.f = 0;
    cpu.set_flag(Flag::C, true);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.flag(Flag::C));
}

#[test]
fn cb_bit_preserves_carry() {
    // BIT 7,A with bit set, then with bit clear
    let (mut cpu, mut bus) = setup(&[0xCB, 0x7F, 0xCB, 0x7F]);
    cpu.regs.a = 0x80;
    cpu.regs.f = 0;
    cpu.set_flag(Flag::C, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert!(!cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::H));
    assert!(!cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::C));

    cpu.regs.a = 0x00;
    step_ok(&mut cpu, &mut bus);
    assert!(cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::C));
}

#[test]
fn cb_set_res_swap() {
    // SET 0,A / RES 0,A / SWAP A
    let (mut cpu, mut bus) = setup(&[0xCB, 0xC7, 0xCB, 0x87, 0xCB, 0x37]);
    cpu.regs.a = 0x00;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);

    cpu.regs.a = 0xAB;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xBA);
    assert!(!cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::C));
}

#[test]
fn cb_hl_costs() {
    // RLC (HL) is a 4-cycle read-modify-write, BIT 0,(HL) a 3-cycle read
    let (mut cpu, mut bus) = setup(&[0xCB, 0x06, 0xCB, 0x46]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x80;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(bus.memory[0xC000], 0x01);
    assert!(cpu.flag(Flag::C));

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert!(!cpu.flag(Flag::Z));
}

#[test]
fn cb_shift_ops() {
    // SLA A / SRA A / SRL A
    let (mut cpu, mut bus) = setup(&[0xCB, 0x27, 0xCB, 0x2F, 0xCB, 0x3F]);
    cpu.regs.a = 0xC1;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x82);
    assert!(cpu.flag(Flag::C));

    step_ok(&mut cpu, &mut bus);
    // SRA keeps the sign bit
    assert_eq!(cpu.regs.a, 0xC1);
    assert!(!cpu.flag(Flag::C));

    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x60);
    assert!(cpu.flag(Flag::C));
}

#[test]
fn daa_after_addition_and_subtraction() {
    // 0x15 + 0x27 = 0x3C, DAA corrects to 0x42
    let (mut cpu, mut bus) = setup(&[0xC6, 0x27, 0x27]);
    cpu.regs.a = 0x15;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x3C);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x42);
    assert!(!cpu.flag(Flag::C));
    assert!(!cpu.flag(Flag::H));

    // 0x20 - 0x13 = 0x0D, DAA corrects to 0x07
    let (mut cpu, mut bus) = setup(&[0xD6, 0x13, 0x27]);
    cpu.regs.a = 0x20;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x0D);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x07);
}

#[test]
fn cpl_scf_ccf() {
    let (mut cpu, mut bus) = setup(&[0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0xAA;
    cpu.regs.f = 0;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x55);
    assert!(cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::H));

    step_ok(&mut cpu, &mut bus);
    assert!(cpu.flag(Flag::C));
    assert!(!cpu.flag(Flag::N));
    assert!(!cpu.flag(Flag::H));

    step_ok(&mut cpu, &mut bus);
    assert!(!cpu.flag(Flag::C));
}

#[test]
fn halt_and_stop_advance() {
    // HALT, then STOP with its padding byte
    let (mut cpu, mut bus) = setup(&[0x76, 0x10, 0x00]);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    // The padding byte is left for the next fetch
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn unknown_opcode_faults_without_accounting() {
    let (mut cpu, mut bus) = setup(&[0xD3]);
    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(err, StepError::UnknownOpcode { opcode: 0xD3 });
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cpu.cycles, 0);
    assert_eq!(err.to_string(), "unknown opcode 0xD3");
}

#[test]
fn all_illegal_opcodes_fault() {
    for opcode in [0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD] {
        let (mut cpu, mut bus) = setup(&[opcode]);
        assert_eq!(
            cpu.step(&mut bus),
            Err(StepError::UnknownOpcode { opcode }),
            "opcode 0x{opcode:02X}"
        );
    }
}

#[test]
fn base_cycle_table_is_zero_only_for_illegal() {
    for (i, &cycles) in BASE_CYCLES.iter().enumerate() {
        let illegal = matches!(OPCODES[i], Opcode::Illegal);
        assert_eq!(cycles == 0, illegal, "opcode 0x{i:02X}");
    }
}

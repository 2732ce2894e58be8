use super::{Dmg, MemoryBus, MCYCLES_PER_FRAME};
use crate::cpu::Bus;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// ROM image with distinct marker bytes at the start of each 16 KiB bank.
fn banked_rom(banks: usize) -> Vec<u8> {
    let mut rom = vec![0u8; banks * 0x4000];
    for bank in 0..banks {
        rom[bank * 0x4000] = 0xB0 | bank as u8;
    }
    rom
}

#[test]
fn ram_regions_read_back() {
    let rom = [0u8; 0x8000];
    let mut bus = MemoryBus::new(&rom);

    bus.write_byte(0x8000, 0x11); // VRAM
    bus.write_byte(0xA000, 0x22); // external RAM
    bus.write_byte(0xC000, 0x33); // WRAM
    bus.write_byte(0xFE00, 0x44); // OAM
    bus.write_byte(0xFF40, 0x55); // I/O
    bus.write_byte(0xFF80, 0x66); // HRAM

    assert_eq!(bus.read_byte(0x8000), 0x11);
    assert_eq!(bus.read_byte(0xA000), 0x22);
    assert_eq!(bus.read_byte(0xC000), 0x33);
    assert_eq!(bus.read_byte(0xFE00), 0x44);
    assert_eq!(bus.read_byte(0xFF40), 0x55);
    assert_eq!(bus.read_byte(0xFF80), 0x66);
}

#[test]
fn rom_writes_are_dropped() {
    let mut rom = [0u8; 0x8000];
    rom[0x0000] = 0xAA;
    rom[0x7FFF] = 0xBB;
    let mut bus = MemoryBus::new(&rom);

    bus.write_byte(0x0000, 0x00);
    bus.write_byte(0x7FFF, 0x00);
    assert_eq!(bus.read_byte(0x0000), 0xAA);
    assert_eq!(bus.read_byte(0x7FFF), 0xBB);
}

#[test]
fn echo_ram_mirrors_wram() {
    let rom = [0u8; 0x8000];
    let mut bus = MemoryBus::new(&rom);

    bus.write_byte(0xC123, 0x5A);
    assert_eq!(bus.read_byte(0xE123), 0x5A);

    bus.write_byte(0xE456, 0xA5);
    assert_eq!(bus.read_byte(0xC456), 0xA5);
}

#[test]
fn unusable_region_reads_open_bus() {
    let rom = [0u8; 0x8000];
    let mut bus = MemoryBus::new(&rom);

    bus.write_byte(0xFEA0, 0x12);
    assert_eq!(bus.read_byte(0xFEA0), 0xFF);
    assert_eq!(bus.read_byte(0xFEFF), 0xFF);
}

#[test]
fn interrupt_enable_register() {
    let rom = [0u8; 0x8000];
    let mut bus = MemoryBus::new(&rom);

    assert_eq!(bus.read_byte(0xFFFF), 0x00);
    bus.write_byte(0xFFFF, 0x1F);
    assert_eq!(bus.read_byte(0xFFFF), 0x1F);
}

#[test]
fn word_access_is_little_endian() {
    let rom = [0u8; 0x8000];
    let mut bus = MemoryBus::new(&rom);

    bus.write_word(0xC000, 0xBEEF);
    assert_eq!(bus.read_byte(0xC000), 0xEF);
    assert_eq!(bus.read_byte(0xC001), 0xBE);
    assert_eq!(bus.read_word(0xC000), 0xBEEF);
}

#[test]
fn bank_latch_switches_upper_window() {
    let rom = banked_rom(4);
    let mut bus = MemoryBus::new(&rom);

    // Power-on maps bank 1.
    assert_eq!(bus.rom_bank(), 1);
    assert_eq!(bus.read_byte(0x0000), 0xB0);
    assert_eq!(bus.read_byte(0x4000), 0xB1);

    bus.write_byte(0x2000, 0x02);
    assert_eq!(bus.rom_bank(), 2);
    assert_eq!(bus.read_byte(0x4000), 0xB2);

    // Bank 0 selects bank 1.
    bus.write_byte(0x2000, 0x00);
    assert_eq!(bus.rom_bank(), 1);
    assert_eq!(bus.read_byte(0x4000), 0xB1);

    // Only the low five bits latch.
    bus.write_byte(0x3FFF, 0xE3);
    assert_eq!(bus.rom_bank(), 3);
}

#[test]
fn reads_past_rom_end_are_open_bus() {
    let rom = [0xAAu8; 0x150];
    let bus = MemoryBus::new(&rom);

    assert_eq!(bus.read_byte(0x0000), 0xAA);
    assert_eq!(bus.read_byte(0x0150), 0xFF);
    assert_eq!(bus.read_byte(0x4000), 0xFF);
}

#[test]
fn reset_restores_power_on_bus_state() {
    let rom = banked_rom(4);
    let mut bus = MemoryBus::new(&rom);

    bus.write_byte(0x2000, 0x03);
    bus.write_byte(0xC000, 0x77);
    bus.reset();

    assert_eq!(bus.rom_bank(), 1);
    assert_eq!(bus.read_byte(0xC000), 0x00);
    // The borrowed ROM is untouched.
    assert_eq!(bus.read_byte(0x0000), 0xB0);
}

#[test]
fn machine_executes_program_against_wram() {
    // LD HL,0xC000 / LD (HL),0x10 / INC (HL)
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0106].copy_from_slice(&[0x21, 0x00, 0xC0, 0x36, 0x10, 0x34]);
    let mut dmg = Dmg::new(&rom);

    for _ in 0..3 {
        dmg.step().unwrap();
    }
    assert_eq!(dmg.bus.read_byte(0xC000), 0x11);
    assert_eq!(dmg.cpu.regs.pc, 0x0106);
}

#[test]
fn step_frame_runs_one_frame_of_cycles() {
    // A ROM full of NOPs; PC stays inside the fixed bank for the frame.
    let rom = vec![0u8; 0x8000];
    let mut dmg = Dmg::new(&rom);

    dmg.step_frame().unwrap();
    assert_eq!(dmg.cpu.cycles, u64::from(MCYCLES_PER_FRAME));

    dmg.step_frame().unwrap();
    assert_eq!(dmg.cpu.cycles, 2 * u64::from(MCYCLES_PER_FRAME));
}

#[test]
fn step_frame_surfaces_cpu_fault() {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100] = 0xD3;
    let mut dmg = Dmg::new(&rom);

    assert!(dmg.step_frame().is_err());
    assert_eq!(dmg.cpu.regs.pc, 0x0101);
}

#[test]
fn video_frame_decodes_tile_shades() {
    let rom = vec![0u8; 0x8000];
    let mut dmg = Dmg::new(&rom);

    // Tile 0, row 0: both planes set, so every pixel is the darkest shade.
    dmg.bus.write_byte(0x8000, 0xFF);
    dmg.bus.write_byte(0x8001, 0xFF);

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    dmg.video_frame(&mut buffer);

    // Top-left pixel is black, the row below (tile row 1, all zero) white.
    assert_eq!(&buffer[0..3], &[0x00, 0x00, 0x00]);
    let below = SCREEN_WIDTH * 3;
    assert_eq!(&buffer[below..below + 3], &[0xFF, 0xFF, 0xFF]);
}

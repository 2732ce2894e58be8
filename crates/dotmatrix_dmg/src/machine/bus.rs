use crate::cpu::Bus;

/// Value seen on the bus when no device responds.
pub(crate) const OPEN_BUS: u8 = 0xFF;

const ROM_BANK_SIZE: usize = 0x4000;
const VRAM_SIZE: usize = 0x2000;
const ERAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

/// The DMG memory bus.
///
/// The full 16-bit address space is partitioned into fixed, non-overlapping
/// regions; every address resolves to exactly one backing store. The ROM
/// image is borrowed from the caller and never copied; reads past its end
/// (short images, out-of-range banks) see the open-bus value.
///
/// Region map:
///
/// | range         | region                                  |
/// |---------------|-----------------------------------------|
/// | 0x0000–0x3FFF | ROM bank 0 (fixed)                      |
/// | 0x4000–0x7FFF | ROM bank `rom_bank` (switchable)        |
/// | 0x8000–0x9FFF | VRAM                                    |
/// | 0xA000–0xBFFF | external cartridge RAM                  |
/// | 0xC000–0xDFFF | WRAM                                    |
/// | 0xE000–0xFDFF | echo of WRAM                            |
/// | 0xFE00–0xFE9F | OAM                                     |
/// | 0xFEA0–0xFEFF | unusable (open bus)                     |
/// | 0xFF00–0xFF7F | I/O registers (plain bytes, no devices) |
/// | 0xFF80–0xFFFE | HRAM                                    |
/// | 0xFFFF        | interrupt enable register               |
pub struct MemoryBus<'a> {
    rom: &'a [u8],
    /// Bank mapped into the 0x4000–0x7FFF window. Never 0; bank 0 is the
    /// fixed window.
    rom_bank: u8,
    vram: [u8; VRAM_SIZE],
    eram: [u8; ERAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    ie_reg: u8,
}

impl<'a> MemoryBus<'a> {
    /// Create a bus over a borrowed cartridge image.
    ///
    /// The image is not validated here (header checksum, mapper type);
    /// that is the loader's concern.
    pub fn new(rom: &'a [u8]) -> Self {
        Self {
            rom,
            rom_bank: 1,
            vram: [0; VRAM_SIZE],
            eram: [0; ERAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            ie_reg: 0,
        }
    }

    /// Clear all bus-owned state. The borrowed ROM is untouched.
    pub fn reset(&mut self) {
        self.rom_bank = 1;
        self.vram = [0; VRAM_SIZE];
        self.eram = [0; ERAM_SIZE];
        self.wram = [0; WRAM_SIZE];
        self.oam = [0; OAM_SIZE];
        self.io = [0; IO_SIZE];
        self.hram = [0; HRAM_SIZE];
        self.ie_reg = 0;
    }

    /// Currently selected switchable ROM bank.
    pub fn rom_bank(&self) -> u8 {
        self.rom_bank
    }

    #[inline]
    fn rom_byte(&self, offset: usize) -> u8 {
        self.rom.get(offset).copied().unwrap_or(OPEN_BUS)
    }
}

impl Bus for MemoryBus<'_> {
    fn read_byte(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => self.rom_byte(usize::from(addr)),
            0x4000..=0x7FFF => {
                let offset =
                    usize::from(self.rom_bank) * ROM_BANK_SIZE + usize::from(addr - 0x4000);
                self.rom_byte(offset)
            }
            0x8000..=0x9FFF => self.vram[usize::from(addr - 0x8000)],
            0xA000..=0xBFFF => self.eram[usize::from(addr - 0xA000)],
            0xC000..=0xDFFF => self.wram[usize::from(addr - 0xC000)],
            0xE000..=0xFDFF => self.wram[usize::from(addr - 0xE000)],
            0xFE00..=0xFE9F => self.oam[usize::from(addr - 0xFE00)],
            0xFEA0..=0xFEFF => OPEN_BUS,
            0xFF00..=0xFF7F => self.io[usize::from(addr - 0xFF00)],
            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)],
            0xFFFF => self.ie_reg,
        }
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        match addr {
            // Writes into 0x2000–0x3FFF latch the switchable bank number
            // (the single bank-index field this bus models; bank 0 selects
            // bank 1 as on MBC1). All other ROM-range writes are dropped,
            // matching hardware open-bus behaviour.
            0x2000..=0x3FFF => {
                let bank = value & 0x1F;
                self.rom_bank = if bank == 0 { 1 } else { bank };
            }
            0x0000..=0x1FFF | 0x4000..=0x7FFF => {}
            0x8000..=0x9FFF => self.vram[usize::from(addr - 0x8000)] = value,
            0xA000..=0xBFFF => self.eram[usize::from(addr - 0xA000)] = value,
            0xC000..=0xDFFF => self.wram[usize::from(addr - 0xC000)] = value,
            0xE000..=0xFDFF => self.wram[usize::from(addr - 0xE000)] = value,
            0xFE00..=0xFE9F => self.oam[usize::from(addr - 0xFE00)] = value,
            // Unusable region: writes disappear.
            0xFEA0..=0xFEFF => {}
            0xFF00..=0xFF7F => self.io[usize::from(addr - 0xFF00)] = value,
            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)] = value,
            0xFFFF => self.ie_reg = value,
        }
    }
}

use dotmatrix_common::Color;

use crate::cpu::Bus;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::MemoryBus;

const BG_MAP_BASE: u16 = 0x9800;
const TILE_DATA_BASE: u16 = 0x8000;

/// The four DMG shades, lightest first.
const SHADES: [Color; 4] = [
    Color::WHITE,
    Color::LIGHT_GRAY,
    Color::DARK_GRAY,
    Color::BLACK,
];

/// Placeholder background renderer.
///
/// Walks the 20×18 visible tiles of the 0x9800 background map and decodes
/// each tile's 2bpp rows from 0x8000 into an RGB24 buffer. There is no
/// scanline timing, scrolling, window, or sprite support; this exists so
/// the host loop has a framebuffer to present while the real PPU is out of
/// scope.
pub(super) fn render_video_frame(bus: &MemoryBus, buffer: &mut [u8]) {
    for tile_y in 0..SCREEN_HEIGHT / 8 {
        for tile_x in 0..SCREEN_WIDTH / 8 {
            let map_index = (tile_y * 32 + tile_x) as u16;
            let tile_index = bus.read_byte(BG_MAP_BASE + map_index);
            for row in 0..8 {
                draw_tile_row(bus, buffer, tile_index, row, tile_x * 8, tile_y * 8 + row);
            }
        }
    }
}

/// Decode one 8-pixel row of a tile into the framebuffer.
///
/// Each row is two bytes: the low byte holds bit 0 of every pixel's colour
/// index, the high byte bit 1, MSB leftmost.
fn draw_tile_row(bus: &MemoryBus, buffer: &mut [u8], tile_index: u8, row: usize, x: usize, y: usize) {
    let row_addr = TILE_DATA_BASE + u16::from(tile_index) * 16 + (row as u16) * 2;
    let lo = bus.read_byte(row_addr);
    let hi = bus.read_byte(row_addr + 1);

    for i in 0..8 {
        let bit = 7 - i;
        let color_index = ((hi >> bit) & 1) << 1 | ((lo >> bit) & 1);
        let color = SHADES[color_index as usize];

        let px = x + i;
        if px >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            continue;
        }
        let offset = (y * SCREEN_WIDTH + px) * 3;
        if offset + 2 < buffer.len() {
            buffer[offset] = color.r;
            buffer[offset + 1] = color.g;
            buffer[offset + 2] = color.b;
        }
    }
}

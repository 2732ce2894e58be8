use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Largest cartridge image accepted (4 MiB, 256 banks of 16 KiB).
pub const MAX_ROM_SIZE: usize = 0x40_0000;

/// Read a cartridge image from disk.
///
/// Empty files are rejected; images larger than `max_size` are truncated
/// with a warning rather than refused, so oversized dumps still boot.
pub fn load_rom(path: impl AsRef<Path>, max_size: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut rom = fs::read(path).with_context(|| format!("failed to read ROM {:?}", path))?;

    if rom.is_empty() {
        bail!("ROM file {:?} is empty", path);
    }
    if rom.len() > max_size {
        log::warn!(
            "ROM {:?} is {} bytes, truncating to {} bytes",
            path,
            rom.len(),
            max_size
        );
        rom.truncate(max_size);
    }

    log::info!("Loaded ROM {:?} ({} bytes)", path, rom.len());
    Ok(rom)
}

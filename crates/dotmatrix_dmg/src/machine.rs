mod bus;
mod dmg;
mod video;

#[cfg(test)]
mod tests;

pub use bus::MemoryBus;
pub use dmg::Dmg;

/// Machine cycles per DMG frame (70224 T-cycles at 4 T-cycles per
/// machine cycle).
pub const MCYCLES_PER_FRAME: u32 = 17_556;

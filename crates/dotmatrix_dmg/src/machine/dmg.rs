use crate::cpu::{Cpu, StepError};

use super::{video, MemoryBus, MCYCLES_PER_FRAME};

/// High-level DMG machine: the CPU core plus the memory bus it executes
/// against. The lifetime is that of the borrowed cartridge image.
pub struct Dmg<'a> {
    pub cpu: Cpu,
    pub bus: MemoryBus<'a>,
}

impl<'a> Dmg<'a> {
    pub fn new(rom: &'a [u8]) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: MemoryBus::new(rom),
        }
    }

    /// Reset CPU and bus-owned memory to power-on state.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
    }

    /// Execute a single instruction; returns its machine-cycle cost.
    pub fn step(&mut self) -> Result<u8, StepError> {
        self.cpu.step(&mut self.bus)
    }

    /// Run the CPU for one frame's worth of machine cycles.
    ///
    /// A fault stops the frame early and is passed to the caller; the
    /// machine is left exactly as the failing `step` left it, so the host
    /// can dump state or freeze the display.
    pub fn step_frame(&mut self) -> Result<(), StepError> {
        let target = self.cpu.cycles + u64::from(MCYCLES_PER_FRAME);
        while self.cpu.cycles < target {
            self.step()?;
        }
        Ok(())
    }

    /// Render the current VRAM contents into an RGB24 buffer.
    pub fn video_frame(&self, buffer: &mut [u8]) {
        video::render_video_frame(&self.bus, buffer);
    }
}

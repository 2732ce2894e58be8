use dotmatrix_common::app::App;
use dotmatrix_common::key::Key;

use crate::{Dmg, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frontend-facing application wrapper for the DMG machine.
///
/// Implements the shared `App` trait so the SDL loop can drive the
/// emulator: one `update` call steps a frame's worth of CPU time and
/// renders the placeholder background view.
pub struct DmgApp<'a> {
    pub dmg: Dmg<'a>,
    should_exit: bool,
    /// Set when the CPU hit an unknown opcode; the machine is frozen but
    /// the last rendered frame stays on screen.
    faulted: bool,
    frame_counter: u64,
    last_pc: u16,
    pc_stagnant_frames: u32,
}

impl<'a> DmgApp<'a> {
    pub fn new(rom: &'a [u8]) -> Self {
        Self {
            dmg: Dmg::new(rom),
            should_exit: false,
            faulted: false,
            frame_counter: 0,
            last_pc: 0,
            pc_stagnant_frames: 0,
        }
    }
}

impl App for DmgApp<'_> {
    fn init(&mut self) {
        log::info!("DMG init: {}", self.dmg.cpu.dump());
        self.last_pc = self.dmg.cpu.regs.pc;
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        if !self.faulted {
            if let Err(fault) = self.dmg.step_frame() {
                // Continuing past an undefined instruction would produce
                // meaningless state; freeze the machine instead.
                log::error!("CPU fault: {fault}; {}", self.dmg.cpu.dump());
                self.faulted = true;
            }
        }

        self.dmg.video_frame(screen_state);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let pc = self.dmg.cpu.regs.pc;
        if pc == self.last_pc {
            self.pc_stagnant_frames = self.pc_stagnant_frames.saturating_add(1);
        } else {
            self.pc_stagnant_frames = 0;
            self.last_pc = pc;
        }

        if self.frame_counter == 1 || self.frame_counter % 60 == 0 {
            log::info!(
                "DMG: frame={} cycles={} ime={} bank={} {}",
                self.frame_counter,
                self.dmg.cpu.cycles,
                self.dmg.cpu.ime,
                self.dmg.bus.rom_bank(),
                self.dmg.cpu.dump(),
            );
        }

        if self.pc_stagnant_frames == 600 {
            log::warn!(
                "DMG: PC unchanged for ~600 frames at 0x{:04X} (faulted={})",
                pc,
                self.faulted
            );
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        // No joypad is modelled; keep the trace for frontend debugging.
        log::debug!("DMG key event: {:?} pressed={}", key, is_down);
        if key == Key::Escape && is_down {
            self.should_exit = true;
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("DMG exit after {} frames", self.frame_counter);
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "dotmatrix".to_string()
    }
}

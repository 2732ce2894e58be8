use anyhow::Result;
use dotmatrix_sdl2::App;
use dotmatrix_sdl2::{SdlContext, SdlInitInfo};

pub mod rom;

/// Run the emulator on a loaded cartridge image until the window closes.
///
/// `scale` overrides the core's default window scale when given.
pub fn run(rom_data: &[u8], scale: Option<u32>) -> Result<()> {
    let app = dotmatrix_dmg::DmgApp::new(rom_data);
    let width = app.width();
    let height = app.height();
    let scale = scale.unwrap_or_else(|| app.scale());
    let title = app.title();
    let init_info = SdlInitInfo::builder()
        .width(width)
        .height(height)
        .scale(scale)
        .title(title)
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

use dotmatrix::rom;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!(
                "No ROM path provided.\n\
                 Usage: dotmatrix path/to/your.gb [scale]"
            );
            std::process::exit(1);
        }
    };
    let scale = match args.next() {
        Some(raw) => match raw.parse::<u32>() {
            Ok(scale) if scale > 0 => Some(scale),
            _ => {
                eprintln!("Invalid scale '{}'. Expected a positive integer.", raw);
                std::process::exit(1);
            }
        },
        None => None,
    };

    log::info!("Playing ROM path: '{}'", rom_path);
    let rom = match rom::load_rom(&rom_path, rom::MAX_ROM_SIZE) {
        Ok(rom) => rom,
        Err(err) => {
            eprintln!("Failed to load ROM: {err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = dotmatrix::run(&rom, scale) {
        eprintln!("Emulator error: {err:#}");
        std::process::exit(1);
    }
}

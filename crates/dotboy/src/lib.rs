use anyhow::{bail, Context, Result};
use dotboy_core::trace::WriteSink;
use dotboy_core::GameBoy;

/// Instruction limit for a headless run; override with `DOTBOY_STEPS`.
/// Roughly twenty seconds of emulated time, enough for the serial-based
/// test ROMs to print their verdict.
const DEFAULT_MAX_INSTRUCTIONS: u64 = 20_000_000;

/// Load a ROM and drive the machine headlessly, then print whatever the
/// cartridge wrote to the serial port.
pub fn run(rom_path: &str) -> Result<()> {
    let rom = std::fs::read(rom_path).with_context(|| format!("failed to read ROM {rom_path}"))?;
    let mut gb = GameBoy::new(rom)?;

    if let Ok(path) = std::env::var("DOTBOY_TRACE") {
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create trace file {path}"))?;
        gb.set_trace_sink(Box::new(WriteSink(std::io::BufWriter::new(file))));
        log::info!("tracing instructions to {path}");
    }

    let max_instructions = std::env::var("DOTBOY_STEPS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_INSTRUCTIONS);

    let mut total_cycles: u64 = 0;
    for _ in 0..max_instructions {
        match gb.step() {
            Ok(cycles) => total_cycles += cycles as u64,
            Err(err) => {
                print_serial(&gb);
                bail!(err);
            }
        }
    }

    log::info!(
        "ran {} instructions ({} T-cycles)",
        gb.cpu.instruction_count(),
        total_cycles,
    );
    print_serial(&gb);
    Ok(())
}

fn print_serial(gb: &GameBoy) {
    let output = gb.serial_output();
    if !output.is_empty() {
        println!("{}", String::from_utf8_lossy(&output));
    }
}

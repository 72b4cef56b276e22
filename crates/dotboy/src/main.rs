fn main() {
    env_logger::init();

    let rom_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: dotboy <rom.gb>");
            std::process::exit(2);
        }
    };

    if let Err(err) = dotboy::run(&rom_path) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

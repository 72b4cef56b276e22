mod bus;
mod cartridge;
mod gameboy;
mod serial;
mod timer;

pub use bus::{IoReg, SystemBus};
pub use cartridge::{CartridgeError, CartridgeHeader, CartridgeType};
pub use gameboy::GameBoy;

/// Total addressable memory for the Game Boy (64 KiB).
///
/// The cartridge regions (ROM at 0x0000–0x7FFF, external RAM at
/// 0xA000–0xBFFF) are served by the mapper; everything else lives in a
/// flat internal array.
const MEMORY_SIZE: usize = 0x10000;

mod header;
mod mbc1;

pub use header::{CartridgeError, CartridgeHeader, CartridgeType};

use mbc1::Mbc1;

/// Wrapper enum for the supported cartridge mappers.
///
/// Dispatch is a plain match so the hot path stays free of virtual
/// calls; new mapper types (MBC2/3/5) slot in as further variants.
pub(super) enum Cartridge {
    Rom(RomOnly),
    Mbc1(Mbc1),
}

impl Cartridge {
    pub(super) fn new(rom: Vec<u8>, header: &CartridgeHeader) -> Self {
        match header.cartridge_type {
            CartridgeType::RomOnly | CartridgeType::RomRam | CartridgeType::RomRamBattery => {
                Self::Rom(RomOnly::new(rom, header))
            }
            CartridgeType::Mbc1 | CartridgeType::Mbc1Ram | CartridgeType::Mbc1RamBattery => {
                Self::Mbc1(Mbc1::new(rom, header))
            }
        }
    }

    /// Read from the cartridge ROM area 0x0000–0x7FFF.
    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        match self {
            Cartridge::Rom(c) => c.rom_read(addr),
            Cartridge::Mbc1(c) => c.rom_read(addr),
        }
    }

    /// Write to the cartridge ROM area: mapper control registers.
    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::Rom(_) => {}
            Cartridge::Mbc1(c) => c.rom_write(addr, value),
        }
    }

    /// Read from the external RAM area 0xA000–0xBFFF.
    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        match self {
            Cartridge::Rom(c) => c.ram_read(addr),
            Cartridge::Mbc1(c) => c.ram_read(addr),
        }
    }

    /// Write to the external RAM area 0xA000–0xBFFF.
    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::Rom(c) => c.ram_write(addr, value),
            Cartridge::Mbc1(c) => c.ram_write(addr, value),
        }
    }
}

/// Unbanked cartridge: up to 32 KiB of ROM, optionally a fixed 8 KiB RAM
/// chip (types 0x08/0x09), no control registers.
pub(super) struct RomOnly {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl RomOnly {
    fn new(rom: Vec<u8>, header: &CartridgeHeader) -> Self {
        Self {
            rom,
            ram: vec![0xFF; header.ram_size],
        }
    }

    fn rom_read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    fn ram_read(&self, addr: u16) -> u8 {
        let offset = (addr - 0xA000) as usize;
        self.ram.get(offset).copied().unwrap_or(0xFF)
    }

    fn ram_write(&mut self, addr: u16, value: u8) {
        let offset = (addr - 0xA000) as usize;
        if let Some(slot) = self.ram.get_mut(offset) {
            *slot = value;
        }
    }
}

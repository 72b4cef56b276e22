use crate::cpu::{Cpu, StepError};
use crate::trace::TraceSink;

use super::bus::SystemBus;
use super::cartridge::{CartridgeError, CartridgeHeader};

/// High-level Game Boy machine: the CPU core plus the system bus.
pub struct GameBoy {
    pub cpu: Cpu,
    bus: SystemBus,
    header: CartridgeHeader,
}

impl GameBoy {
    /// Attach a ROM image and power on. Fails if the image has no valid
    /// header or declares a mapper we do not support.
    pub fn new(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        let header = CartridgeHeader::parse(&rom)?;
        log::info!(
            "cartridge \"{}\": {:?}, {} KiB ROM, {} KiB RAM, version {}",
            header.title,
            header.cartridge_type,
            header.rom_size / 1024,
            header.ram_size / 1024,
            header.version,
        );
        let bus = SystemBus::new(rom, &header);
        Ok(Self {
            cpu: Cpu::new(),
            bus,
            header,
        })
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    pub fn bus(&self) -> &SystemBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut SystemBus {
        &mut self.bus
    }

    /// Advance one instruction; returns the T-cycles it consumed.
    pub fn step(&mut self) -> Result<u32, StepError> {
        self.cpu.step(&mut self.bus)
    }

    /// Install an instruction trace sink on the CPU.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.cpu.set_trace_sink(sink);
    }

    /// Serial bytes transferred so far, oldest first.
    pub fn serial_output(&self) -> Vec<u8> {
        self.bus.serial_output()
    }
}

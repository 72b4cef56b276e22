/// Errors raised while attaching a cartridge image.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("ROM image too small for a cartridge header ({0} bytes)")]
    RomTooSmall(usize),
    #[error("unsupported cartridge type 0x{0:02X}")]
    UnsupportedType(u8),
}

/// Cartridge hardware declared at header byte 0x147. Only the unbanked
/// and MBC1 families are supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartridgeType {
    RomOnly,
    Mbc1,
    Mbc1Ram,
    Mbc1RamBattery,
    RomRam,
    RomRamBattery,
}

impl CartridgeType {
    fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::RomOnly),
            0x01 => Some(Self::Mbc1),
            0x02 => Some(Self::Mbc1Ram),
            0x03 => Some(Self::Mbc1RamBattery),
            0x08 => Some(Self::RomRam),
            0x09 => Some(Self::RomRamBattery),
            _ => None,
        }
    }
}

/// Typed view of the cartridge header at 0x100–0x14F.
#[derive(Clone, Debug, PartialEq)]
pub struct CartridgeHeader {
    /// Title bytes 0x134–0x143, trimmed at the first NUL.
    pub title: String,
    /// Manufacturer code 0x13F–0x142 (overlaps the title on post-CGB
    /// cartridges).
    pub manufacturer: String,
    pub cgb_flag: u8,
    pub new_licensee: [u8; 2],
    pub sgb_flag: u8,
    pub cartridge_type: CartridgeType,
    /// Declared ROM size in bytes (32 KiB << header byte 0x148).
    pub rom_size: usize,
    /// Declared external RAM size in bytes.
    pub ram_size: usize,
    pub destination: u8,
    pub old_licensee: u8,
    pub version: u8,
    pub header_checksum: u8,
    /// Global checksum, big-endian at 0x14E–0x14F. Not verified.
    pub global_checksum: u16,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<Self, CartridgeError> {
        if rom.len() < 0x150 {
            return Err(CartridgeError::RomTooSmall(rom.len()));
        }

        let cartridge_type = CartridgeType::from_byte(rom[0x147])
            .ok_or(CartridgeError::UnsupportedType(rom[0x147]))?;

        let header = Self {
            title: printable_ascii(&rom[0x134..0x144]),
            manufacturer: printable_ascii(&rom[0x13F..0x143]),
            cgb_flag: rom[0x143],
            new_licensee: [rom[0x144], rom[0x145]],
            sgb_flag: rom[0x146],
            cartridge_type,
            rom_size: (32 * 1024) << rom[0x148],
            ram_size: ram_size_bytes(rom[0x149]),
            destination: rom[0x14A],
            old_licensee: rom[0x14B],
            version: rom[0x14C],
            header_checksum: rom[0x14D],
            global_checksum: u16::from_be_bytes([rom[0x14E], rom[0x14F]]),
        };

        // The boot ROM refuses carts whose header checksum is off; we only
        // warn, since plenty of homebrew never fills it in.
        let computed = compute_header_checksum(rom);
        if computed != header.header_checksum {
            log::warn!(
                "header checksum mismatch: header says 0x{:02X}, computed 0x{:02X}",
                header.header_checksum,
                computed,
            );
        }

        Ok(header)
    }
}

/// External RAM size table for header byte 0x149.
fn ram_size_bytes(code: u8) -> usize {
    match code {
        0x02 => 8 * 1024,
        0x03 => 32 * 1024,
        0x04 => 128 * 1024,
        0x05 => 64 * 1024,
        _ => 0,
    }
}

/// Checksum over 0x134–0x14C: x = x - byte - 1 over the range.
fn compute_header_checksum(rom: &[u8]) -> u8 {
    rom[0x134..=0x14C]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1))
}

/// Decode a header text field: stop at the first NUL, replace anything
/// non-printable.
fn printable_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
        .collect()
}

use super::bus::{IoReg, SystemBus};

/// Size of the serial output ring.
const RING_LEN: usize = 255;

/// Ring buffer collecting completed serial transfers.
///
/// Test ROMs (blargg's in particular) report their results by writing
/// bytes out of the link port; the host reads them back through
/// `SystemBus::serial_output`.
pub(super) struct SerialRing {
    buffer: [u8; RING_LEN],
    pos: usize,
    written: u64,
}

impl Default for SerialRing {
    fn default() -> Self {
        Self {
            buffer: [0; RING_LEN],
            pos: 0,
            written: 0,
        }
    }
}

impl SerialRing {
    pub(super) fn push(&mut self, byte: u8) {
        self.buffer[self.pos] = byte;
        self.pos = (self.pos + 1) % RING_LEN;
        self.written += 1;
    }

    /// Bytes in transfer order. Once the ring has wrapped, only the most
    /// recent `RING_LEN` bytes survive.
    pub(super) fn output(&self) -> Vec<u8> {
        if (self.written as usize) < RING_LEN {
            self.buffer[..self.pos].to_vec()
        } else {
            let mut out = Vec::with_capacity(RING_LEN);
            out.extend_from_slice(&self.buffer[self.pos..]);
            out.extend_from_slice(&self.buffer[..self.pos]);
            out
        }
    }

    /// Total bytes ever pushed, including those the ring has dropped.
    #[cfg(test)]
    pub(super) fn len(&self) -> u64 {
        self.written
    }
}

impl SystemBus {
    /// Serial clock: while SC bit 7 is set, a transfer completes every
    /// `divisor(SC)` T-cycles — SB moves into the ring, SC's start bit
    /// clears and the serial interrupt is requested.
    ///
    /// The divisor table is indexed by SC[1:0]. On DMG hardware only
    /// bit 0 (clock source) is meaningful; treating bit 1 as a speed
    /// select approximates the CGB behaviour and is good enough for
    /// test-ROM output.
    pub(super) fn serial_tick(&mut self) {
        let sc = self.read_reg(IoReg::Sc);
        if sc & 0x80 == 0 {
            return;
        }

        let divisor: u16 = match sc & 0x03 {
            0x00 => 512,
            0x01 => 256,
            0x02 => 16,
            _ => 8,
        };
        if self.sys_counter % divisor != 0 {
            return;
        }

        let sb = self.read_reg(IoReg::Sb);
        self.serial.push(sb);
        self.memory[IoReg::Sc.addr() as usize] = sc & !0x80;
        self.memory[IoReg::If.addr() as usize] |= 0x08;
    }
}

use super::bus::{IoReg, SystemBus};

/// TIMA period in T-cycles for each TAC[1:0] clock select.
fn tima_period(tac: u8) -> u16 {
    match tac & 0x03 {
        0x00 => 1024,
        0x01 => 16,
        0x02 => 64,
        _ => 256,
    }
}

impl SystemBus {
    /// Divider and timer clocking, run once per T-cycle.
    ///
    /// DIV advances every 256 T-cycles regardless of TAC. TIMA advances
    /// at the TAC-selected rate while TAC bit 2 is set; overflowing from
    /// 0xFF reloads it from TMA and requests the timer interrupt.
    pub(super) fn timer_tick(&mut self) {
        if self.sys_counter % 256 == 0 {
            let div = self.read_reg(IoReg::Div).wrapping_add(1);
            self.memory[IoReg::Div.addr() as usize] = div;
        }

        let tac = self.read_reg(IoReg::Tac);
        if tac & 0x04 == 0 {
            return;
        }

        if self.sys_counter % tima_period(tac) == 0 {
            let (tima, overflow) = self.read_reg(IoReg::Tima).overflowing_add(1);
            if overflow {
                let tma = self.read_reg(IoReg::Tma);
                self.memory[IoReg::Tima.addr() as usize] = tma;
                self.memory[IoReg::If.addr() as usize] |= 0x04;
            } else {
                self.memory[IoReg::Tima.addr() as usize] = tima;
            }
        }
    }
}

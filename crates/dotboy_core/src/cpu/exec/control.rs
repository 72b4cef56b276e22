use crate::cpu::{Bus, Cond, Cpu};

impl Cpu {
    /// JP cc,a16. The immediate is always consumed; the jump itself takes
    /// one extra M-cycle when taken.
    pub(super) fn jp<B: Bus>(&mut self, bus: &mut B, cond: Cond) {
        let addr = self.fetch16(bus);
        if self.cond_met(cond) {
            self.regs.pc = addr;
            self.tick();
        }
    }

    /// JP HL. No memory traffic and no extra cycle.
    pub(super) fn jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    /// JR cc,r8: relative jump from the address after the operand.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, cond: Cond) {
        let offset = self.fetch8(bus) as i8;
        if self.cond_met(cond) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            self.tick();
        }
    }

    /// CALL cc,a16. A taken call pays one M-cycle of push setup before
    /// the two stack writes.
    pub(super) fn call<B: Bus>(&mut self, bus: &mut B, cond: Cond) {
        let addr = self.fetch16(bus);
        if self.cond_met(cond) {
            self.tick();
            let ret = self.regs.pc;
            self.push16(bus, ret);
            self.regs.pc = addr;
        }
    }

    /// RET / RET cc. The conditional form spends one M-cycle evaluating
    /// the condition and, when taken, one more loading PC — on top of the
    /// two pop reads.
    pub(super) fn ret<B: Bus>(&mut self, bus: &mut B, cond: Cond) {
        if cond != Cond::Always {
            self.tick();
            if !self.cond_met(cond) {
                return;
            }
        }
        self.regs.pc = self.pop16(bus);
        self.tick();
    }

    /// RETI: return then enable interrupts.
    pub(super) fn reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop16(bus);
        self.tick();
        self.ime = true;
    }

    /// RST: push PC and jump to one of the eight fixed vectors.
    pub(super) fn rst<B: Bus>(&mut self, bus: &mut B, vector: u8) {
        self.tick();
        let ret = self.regs.pc;
        self.push16(bus, ret);
        self.regs.pc = vector as u16;
    }
}

use crate::cpu::{Bus, Cpu, Operand};

impl Cpu {
    /// PUSH rr: one M-cycle of internal delay, then two stack writes.
    pub(super) fn push<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load16(bus, op);
        self.tick();
        self.push16(bus, value);
    }

    /// POP rr: two stack reads. POP AF keeps F's low nibble zero via
    /// `store16`.
    pub(super) fn pop<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.pop16(bus);
        self.store16(bus, op, value);
    }
}

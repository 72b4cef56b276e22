use crate::cpu::{Bus, Cpu, Flag, Operand};

impl Cpu {
    /// INC on an 8-bit operand. C is untouched.
    pub(super) fn inc8<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = value.wrapping_add(1);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        self.store8(bus, op, result);
    }

    /// DEC on an 8-bit operand. C is untouched.
    pub(super) fn dec8<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = value.wrapping_sub(1);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, (value & 0x0F) == 0);
        self.store8(bus, op, result);
    }

    /// INC rr. No flags; one internal M-cycle.
    pub(super) fn inc16<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load16(bus, op).wrapping_add(1);
        self.store16(bus, op, value);
        self.tick();
    }

    /// DEC rr. No flags; one internal M-cycle.
    pub(super) fn dec16<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load16(bus, op).wrapping_sub(1);
        self.store16(bus, op, value);
        self.tick();
    }
}

use crate::cpu::{Bus, Cpu, Flag, Operand};

impl Cpu {
    /// Execute a CB-prefixed instruction. The page is fully regular:
    /// bits 7..6 select the group, bits 5..3 the sub-operation or bit
    /// index, bits 2..0 the operand slot.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) {
        let cb = self.fetch8(bus);
        let op = Operand::r8_slot(cb);
        let n = (cb >> 3) & 0x07;

        match cb >> 6 {
            0 => match n {
                0 => self.rlc(bus, op),
                1 => self.rrc(bus, op),
                2 => self.rl(bus, op),
                3 => self.rr(bus, op),
                4 => self.sla(bus, op),
                5 => self.sra(bus, op),
                6 => self.swap(bus, op),
                _ => self.srl(bus, op),
            },
            1 => self.bit(bus, n, op),
            2 => self.res(bus, n, op),
            _ => self.set(bus, n, op),
        }
    }

    /// Z flag for the rotate/shift family: the unprefixed rotate-A forms
    /// (via the `Acc` operand) always clear Z, the CB forms set it from
    /// the result.
    #[inline]
    fn rotate_z(op: Operand, result: u8) -> bool {
        op != Operand::Acc && result == 0
    }

    /// RLC: rotate left, bit 7 to carry and bit 0.
    pub(super) fn rlc<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = value.rotate_left(1);
        self.regs
            .set_flags(Self::rotate_z(op, result), false, false, value & 0x80 != 0);
        self.store8(bus, op, result);
    }

    /// RRC: rotate right, bit 0 to carry and bit 7.
    pub(super) fn rrc<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = value.rotate_right(1);
        self.regs
            .set_flags(Self::rotate_z(op, result), false, false, value & 0x01 != 0);
        self.store8(bus, op, result);
    }

    /// RL: rotate left through carry.
    pub(super) fn rl<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let carry_in = self.regs.flag(Flag::C) as u8;
        let result = (value << 1) | carry_in;
        self.regs
            .set_flags(Self::rotate_z(op, result), false, false, value & 0x80 != 0);
        self.store8(bus, op, result);
    }

    /// RR: rotate right through carry.
    pub(super) fn rr<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let carry_in = (self.regs.flag(Flag::C) as u8) << 7;
        let result = (value >> 1) | carry_in;
        self.regs
            .set_flags(Self::rotate_z(op, result), false, false, value & 0x01 != 0);
        self.store8(bus, op, result);
    }

    /// SLA: arithmetic shift left.
    pub(super) fn sla<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = value << 1;
        self.regs
            .set_flags(result == 0, false, false, value & 0x80 != 0);
        self.store8(bus, op, result);
    }

    /// SRA: arithmetic shift right (bit 7 is kept).
    pub(super) fn sra<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = (value >> 1) | (value & 0x80);
        self.regs
            .set_flags(result == 0, false, false, value & 0x01 != 0);
        self.store8(bus, op, result);
    }

    /// SWAP: exchange nibbles.
    pub(super) fn swap<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = value.rotate_left(4);
        self.regs.set_flags(result == 0, false, false, false);
        self.store8(bus, op, result);
    }

    /// SRL: logical shift right.
    pub(super) fn srl<B: Bus>(&mut self, bus: &mut B, op: Operand) {
        let value = self.load8(bus, op);
        let result = value >> 1;
        self.regs
            .set_flags(result == 0, false, false, value & 0x01 != 0);
        self.store8(bus, op, result);
    }

    /// BIT n: Z from the complement of the tested bit; C unchanged.
    pub(super) fn bit<B: Bus>(&mut self, bus: &mut B, n: u8, op: Operand) {
        let value = self.load8(bus, op);
        self.regs.set_flag(Flag::Z, value & (1 << n) == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, true);
    }

    /// RES n: clear a bit. No flags.
    pub(super) fn res<B: Bus>(&mut self, bus: &mut B, n: u8, op: Operand) {
        let value = self.load8(bus, op);
        self.store8(bus, op, value & !(1 << n));
    }

    /// SET n: set a bit. No flags.
    pub(super) fn set<B: Bus>(&mut self, bus: &mut B, n: u8, op: Operand) {
        let value = self.load8(bus, op);
        self.store8(bus, op, value | (1 << n));
    }
}

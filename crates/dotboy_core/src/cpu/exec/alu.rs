use crate::cpu::{alu, Bus, Cpu, Flag, Operand};

impl Cpu {
    /// Dispatch one of the eight accumulator ALU families by its opcode
    /// row index: 0=ADD 1=ADC 2=SUB 3=SBC 4=AND 5=XOR 6=OR 7=CP.
    pub(super) fn acc_alu<B: Bus>(&mut self, bus: &mut B, family: u8, src: Operand) {
        match family & 0x07 {
            0 => self.add_a(bus, src, false),
            1 => self.add_a(bus, src, true),
            2 => self.sub_a(bus, src, false),
            3 => self.sub_a(bus, src, true),
            4 => self.and_a(bus, src),
            5 => self.xor_a(bus, src),
            6 => self.or_a(bus, src),
            _ => self.cp_a(bus, src),
        }
    }

    /// ADD/ADC. ADC runs as two chained 8-bit adds; carry and half carry
    /// are the OR of both stages.
    fn add_a<B: Bus>(&mut self, bus: &mut B, src: Operand, use_carry: bool) {
        let value = self.load8(bus, src);
        let carry_in = (use_carry && self.regs.flag(Flag::C)) as u8;
        let (partial, c1, h1) = alu::add8(self.regs.a, value);
        let (result, c2, h2) = alu::add8(partial, carry_in);
        self.regs.a = result;
        self.regs.set_flags(result == 0, false, h1 || h2, c1 || c2);
    }

    /// SUB/SBC, chained like ADD/ADC.
    fn sub_a<B: Bus>(&mut self, bus: &mut B, src: Operand, use_carry: bool) {
        let value = self.load8(bus, src);
        let carry_in = (use_carry && self.regs.flag(Flag::C)) as u8;
        let (partial, c1, h1) = alu::sub8(self.regs.a, value);
        let (result, c2, h2) = alu::sub8(partial, carry_in);
        self.regs.a = result;
        self.regs.set_flags(result == 0, true, h1 || h2, c1 || c2);
    }

    fn and_a<B: Bus>(&mut self, bus: &mut B, src: Operand) {
        let value = self.load8(bus, src);
        self.regs.a &= value;
        self.regs.set_flags(self.regs.a == 0, false, true, false);
    }

    fn xor_a<B: Bus>(&mut self, bus: &mut B, src: Operand) {
        let value = self.load8(bus, src);
        self.regs.a ^= value;
        self.regs.set_flags(self.regs.a == 0, false, false, false);
    }

    fn or_a<B: Bus>(&mut self, bus: &mut B, src: Operand) {
        let value = self.load8(bus, src);
        self.regs.a |= value;
        self.regs.set_flags(self.regs.a == 0, false, false, false);
    }

    /// CP: flags as if `A - value`, A unchanged.
    fn cp_a<B: Bus>(&mut self, bus: &mut B, src: Operand) {
        let value = self.load8(bus, src);
        let (result, carry, half) = alu::sub8(self.regs.a, value);
        self.regs.set_flags(result == 0, true, half, carry);
    }

    /// ADD HL,rr. Z is untouched; the 16-bit add takes an internal
    /// M-cycle.
    pub(super) fn add_hl<B: Bus>(&mut self, bus: &mut B, src: Operand) {
        let value = self.load16(bus, src);
        let (result, carry, half) = alu::add16(self.regs.hl(), value);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, half);
        self.regs.set_flag(Flag::C, carry);
        self.regs.set_hl(result);
        self.tick();
    }

    /// ADD SP,r8. Same flag rule as LD HL,SP+r8 but with one more
    /// internal M-cycle.
    pub(super) fn add_sp_offset<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        let (result, carry, half) = alu::add16_signed8(self.regs.sp, offset);
        self.regs.set_flags(false, false, half, carry);
        self.regs.sp = result;
        self.tick();
        self.tick();
    }

    /// Decimal adjust after BCD arithmetic.
    pub(super) fn daa(&mut self) {
        let mut a = self.regs.a;
        let mut carry = self.regs.flag(Flag::C);

        if !self.regs.flag(Flag::N) {
            // After an addition.
            if self.regs.flag(Flag::H) || (a & 0x0F) > 0x09 {
                a = a.wrapping_add(0x06);
            }
            if carry || self.regs.a > 0x99 {
                a = a.wrapping_add(0x60);
                carry = true;
            }
        } else {
            // After a subtraction.
            if self.regs.flag(Flag::H) {
                a = a.wrapping_sub(0x06);
            }
            if carry {
                a = a.wrapping_sub(0x60);
            }
        }

        self.regs.a = a;
        self.regs.set_flag(Flag::Z, a == 0);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, carry);
    }

    /// CPL: complement A. Z and C are unchanged.
    pub(super) fn cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, true);
    }

    /// SCF: set carry.
    pub(super) fn scf(&mut self) {
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, true);
    }

    /// CCF: toggle carry.
    pub(super) fn ccf(&mut self) {
        let carry = self.regs.flag(Flag::C);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, !carry);
    }
}

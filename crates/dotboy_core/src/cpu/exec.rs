mod alu;
mod bits;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cond, Cpu, Operand, StepError};

impl Cpu {
    /// Decode and execute one primary-page opcode.
    ///
    /// The table is written out in full so the compiler proves all 256
    /// entries are handled; the regular quadrants (LD r,r' and the
    /// accumulator ALU block) decode their operand slots from the opcode
    /// bit fields. Cycle costs fall out of the memory accesses each
    /// family routine performs plus its explicit internal ticks.
    pub(super) fn exec_opcode<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
    ) -> Result<(), StepError> {
        match opcode {
            // NOP
            0x00 => {}

            // LD rr,d16
            0x01 => self.ld16(bus, Operand::BC, Operand::Imm16),
            0x11 => self.ld16(bus, Operand::DE, Operand::Imm16),
            0x21 => self.ld16(bus, Operand::HL, Operand::Imm16),
            0x31 => self.ld16(bus, Operand::SP, Operand::Imm16),

            // LD (rr),A / LD A,(rr)
            0x02 => self.ld8(bus, Operand::IndBC, Operand::A),
            0x12 => self.ld8(bus, Operand::IndDE, Operand::A),
            0x22 => self.ld8(bus, Operand::IndHLInc, Operand::A),
            0x32 => self.ld8(bus, Operand::IndHLDec, Operand::A),
            0x0A => self.ld8(bus, Operand::A, Operand::IndBC),
            0x1A => self.ld8(bus, Operand::A, Operand::IndDE),
            0x2A => self.ld8(bus, Operand::A, Operand::IndHLInc),
            0x3A => self.ld8(bus, Operand::A, Operand::IndHLDec),

            // INC rr / DEC rr
            0x03 => self.inc16(bus, Operand::BC),
            0x13 => self.inc16(bus, Operand::DE),
            0x23 => self.inc16(bus, Operand::HL),
            0x33 => self.inc16(bus, Operand::SP),
            0x0B => self.dec16(bus, Operand::BC),
            0x1B => self.dec16(bus, Operand::DE),
            0x2B => self.dec16(bus, Operand::HL),
            0x3B => self.dec16(bus, Operand::SP),

            // INC r / DEC r (slot in bits 5..3, including (HL))
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                self.inc8(bus, Operand::r8_slot(opcode >> 3))
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                self.dec8(bus, Operand::r8_slot(opcode >> 3))
            }

            // LD r,d8 (and LD (HL),d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.ld8(bus, Operand::r8_slot(opcode >> 3), Operand::Imm8)
            }

            // Unprefixed rotates on A: Z always clears via the Acc alias.
            0x07 => self.rlc(bus, Operand::Acc),
            0x0F => self.rrc(bus, Operand::Acc),
            0x17 => self.rl(bus, Operand::Acc),
            0x1F => self.rr(bus, Operand::Acc),

            // LD (a16),SP
            0x08 => self.ld16(bus, Operand::IndImm16, Operand::SP),

            // ADD HL,rr
            0x09 => self.add_hl(bus, Operand::BC),
            0x19 => self.add_hl(bus, Operand::DE),
            0x29 => self.add_hl(bus, Operand::HL),
            0x39 => self.add_hl(bus, Operand::SP),

            // STOP
            0x10 => self.stop(bus)?,

            // JR r8 / JR cc,r8
            0x18 => self.jr(bus, Cond::Always),
            0x20 => self.jr(bus, Cond::NZ),
            0x28 => self.jr(bus, Cond::Z),
            0x30 => self.jr(bus, Cond::NC),
            0x38 => self.jr(bus, Cond::C),

            // Accumulator/flag housekeeping.
            0x27 => self.daa(),
            0x2F => self.cpl(),
            0x37 => self.scf(),
            0x3F => self.ccf(),

            // HALT sits in the middle of the LD quadrant.
            0x76 => self.halt(),

            // LD r,r' quadrant: destination in bits 5..3, source in 2..0.
            0x40..=0x75 | 0x77..=0x7F => self.ld8(
                bus,
                Operand::r8_slot(opcode >> 3),
                Operand::r8_slot(opcode),
            ),

            // Accumulator ALU quadrant: family in bits 5..3, source slot
            // in 2..0.
            0x80..=0xBF => self.acc_alu(bus, opcode >> 3, Operand::r8_slot(opcode)),

            // ... and the same eight families with an immediate operand.
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                self.acc_alu(bus, opcode >> 3, Operand::Imm8)
            }

            // RET cc / RET / RETI
            0xC0 => self.ret(bus, Cond::NZ),
            0xC8 => self.ret(bus, Cond::Z),
            0xD0 => self.ret(bus, Cond::NC),
            0xD8 => self.ret(bus, Cond::C),
            0xC9 => self.ret(bus, Cond::Always),
            0xD9 => self.reti(bus),

            // POP rr / PUSH rr
            0xC1 => self.pop(bus, Operand::BC),
            0xD1 => self.pop(bus, Operand::DE),
            0xE1 => self.pop(bus, Operand::HL),
            0xF1 => self.pop(bus, Operand::AF),
            0xC5 => self.push(bus, Operand::BC),
            0xD5 => self.push(bus, Operand::DE),
            0xE5 => self.push(bus, Operand::HL),
            0xF5 => self.push(bus, Operand::AF),

            // JP cc,a16 / JP a16 / JP HL
            0xC2 => self.jp(bus, Cond::NZ),
            0xCA => self.jp(bus, Cond::Z),
            0xD2 => self.jp(bus, Cond::NC),
            0xDA => self.jp(bus, Cond::C),
            0xC3 => self.jp(bus, Cond::Always),
            0xE9 => self.jp_hl(),

            // CALL cc,a16 / CALL a16
            0xC4 => self.call(bus, Cond::NZ),
            0xCC => self.call(bus, Cond::Z),
            0xD4 => self.call(bus, Cond::NC),
            0xDC => self.call(bus, Cond::C),
            0xCD => self.call(bus, Cond::Always),

            // RST: vector encoded in bits 5..3.
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                self.rst(bus, opcode & 0x38)
            }

            // CB prefix page.
            0xCB => self.exec_cb(bus),

            // High-page loads.
            0xE0 => self.ld8(bus, Operand::HighImm8, Operand::A),
            0xF0 => self.ld8(bus, Operand::A, Operand::HighImm8),
            0xE2 => self.ld8(bus, Operand::HighC, Operand::A),
            0xF2 => self.ld8(bus, Operand::A, Operand::HighC),
            0xEA => self.ld8(bus, Operand::IndImm16, Operand::A),
            0xFA => self.ld8(bus, Operand::A, Operand::IndImm16),

            // Stack-pointer arithmetic.
            0xE8 => self.add_sp_offset(bus),
            0xF8 => self.ld_hl_sp_offset(bus),
            0xF9 => self.ld_sp_hl(),

            // Interrupt master enable.
            0xF3 => self.di(),
            0xFB => self.ei(),

            // Opcode holes: these lock up real hardware.
            0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
                let pc = self.regs.pc.wrapping_sub(1);
                log::error!(
                    "illegal opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X})",
                    sp = self.regs.sp,
                    af = self.regs.af(),
                );
                return Err(StepError::IllegalOpcode { opcode, pc });
            }
        }

        Ok(())
    }
}

use super::{Bus, Cpu, StepError};

const IF_ADDR: u16 = 0xFF0F;
const IE_ADDR: u16 = 0xFFFF;

impl Cpu {
    /// Execute one instruction (or one HALT idle cycle) and return the
    /// number of T-cycles consumed, including any interrupt dispatch.
    ///
    /// Order of events: trace record, instruction body (each memory
    /// access accounting one M-cycle), peripheral ticks for the body's
    /// T-cycles, then the interrupt controller check.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, StepError> {
        self.m_cycle = 0;

        self.emit_trace(bus);

        if self.halted {
            // No fetch while halted; burn one M-cycle so peripherals
            // keep running.
            self.tick();
        } else {
            let opcode = self.fetch8(bus);
            self.exec_opcode(bus, opcode)?;
            self.exe_counter += 1;
        }

        bus.tick(self.m_cycle * 4);

        if self.service_interrupts(bus) {
            // Flat dispatch overhead; peripherals see these cycles too.
            self.m_cycle += 3;
            bus.tick(3 * 4);
        }

        Ok(self.m_cycle * 4)
    }

    /// Interrupt controller check, run once the instruction body has
    /// ticked the peripherals.
    ///
    /// A pending request always wakes HALT; dispatching additionally
    /// requires IME. The lowest-index pending interrupt wins
    /// (VBlank > STAT > Timer > Serial > Joypad).
    ///
    /// Returns true when a dispatch happened.
    fn service_interrupts<B: Bus>(&mut self, bus: &mut B) -> bool {
        let iflags = bus.read8(IF_ADDR);
        let pending = bus.read8(IE_ADDR) & iflags & 0x1F;
        if pending == 0 {
            return false;
        }

        self.halted = false;
        if !self.ime {
            return false;
        }

        let index = pending.trailing_zeros() as u8;
        bus.write8(IF_ADDR, iflags & !(1 << index));
        self.ime = false;

        // Push the interrupted PC and jump to the vector. The stack
        // writes are covered by the flat 3 M-cycle dispatch cost the
        // caller charges, so they bypass the per-access tick helpers.
        let pc = self.regs.pc;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, (pc >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, pc as u8);
        self.regs.pc = 0x0040 + (index as u16) * 8;

        true
    }

    /// Write one trace record describing the state the upcoming
    /// instruction sees. Sink errors are dropped: tracing must never
    /// perturb execution.
    fn emit_trace<B: Bus>(&mut self, bus: &mut B) {
        if self.trace.is_none() {
            return;
        }
        let ie = bus.read8(IE_ADDR);
        let iflags = bus.read8(IF_ADDR);
        let line = crate::trace::format_record(
            self.exe_counter,
            &self.regs,
            self.ime,
            self.halted,
            iflags,
            ie,
        );
        if let Some(sink) = self.trace.as_mut() {
            let _ = sink.write(line.as_bytes());
        }
    }
}

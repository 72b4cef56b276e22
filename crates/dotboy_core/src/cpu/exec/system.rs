use crate::cpu::{Bus, Cpu, StepError};

impl Cpu {
    /// HALT: idle until an interrupt becomes pending (see the step loop
    /// for the wakeup rule).
    pub(super) fn halt(&mut self) {
        self.halted = true;
    }

    /// STOP consumes its padding byte; the low-power state itself is not
    /// modelled. Hardware only defines the 0x10 0x00 pair, so any other
    /// padding is a decode error.
    pub(super) fn stop<B: Bus>(&mut self, bus: &mut B) -> Result<(), StepError> {
        let pc = self.regs.pc.wrapping_sub(1);
        let padding = self.fetch8(bus);
        if padding != 0x00 {
            return Err(StepError::IllegalStopPadding { padding, pc });
        }
        Ok(())
    }

    pub(super) fn di(&mut self) {
        self.ime = false;
    }

    /// EI enables IME immediately. The hardware delays the enable by one
    /// instruction; interrupt-heavy code that relies on that window is
    /// rare enough that we take the simple semantics.
    pub(super) fn ei(&mut self) {
        self.ime = true;
    }
}

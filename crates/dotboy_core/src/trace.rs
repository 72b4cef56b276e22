//! Pluggable instruction tracing.
//!
//! The CPU owns at most one sink and writes one formatted record per
//! `step`. Sinks are a capability with a single fallible method; the CPU
//! drops every error, so a full disk or closed pipe never affects
//! emulation.

use std::io::{self, Write};

use crate::cpu::{Flag, Registers};

pub trait TraceSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// Adapter exposing any `io::Write` (a file, stderr, a `Vec<u8>`) as a
/// trace sink.
pub struct WriteSink<W>(pub W);

impl<W: Write> TraceSink for WriteSink<W> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.0.write_all(bytes)
    }
}

/// Render one trace record: instruction index, PC/SP, flags as ZNHC
/// letters, the register file, and the interrupt state.
pub(crate) fn format_record(
    index: u64,
    regs: &Registers,
    ime: bool,
    halted: bool,
    iflags: u8,
    ie: u8,
) -> String {
    let z = if regs.flag(Flag::Z) { 'Z' } else { '-' };
    let n = if regs.flag(Flag::N) { 'N' } else { '-' };
    let h = if regs.flag(Flag::H) { 'H' } else { '-' };
    let c = if regs.flag(Flag::C) { 'C' } else { '-' };
    format!(
        "#{index:08} pc=0x{pc:04X} sp=0x{sp:04X} f={z}{n}{h}{c} a=0x{a:02X} \
         bc=0x{bc:04X} de=0x{de:04X} hl=0x{hl:04X} ime={ime} if=0x{iflags:02X} \
         ie=0x{ie:02X} halt={halted}\n",
        pc = regs.pc,
        sp = regs.sp,
        a = regs.a,
        bc = regs.bc(),
        de = regs.de(),
        hl = regs.hl(),
        ime = ime as u8,
        halted = halted as u8,
    )
}

//! Interactive devices driving a terminal through crossterm.

use crate::devices::{InputDevice, OutputDevice};
use crate::errors::LmcEmulatorError;
use crate::numbers::{Cell, MAX_CELL_VALUE};
use crossterm::ExecutableCommand;
use crossterm::style::Print;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write, stdin, stdout};

/// An input device which prompts the user for a value on every read.
///
/// The value has to be a number between 0 and [`MAX_CELL_VALUE`]; anything
/// else is answered with a range message and another prompt. Reading blocks
/// the calling thread, which is the contract of an interactive device.
///
/// Generic over reader and writer so tests can script the exchange.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
}

impl TerminalInput<BufReader<Stdin>, Stdout> {
    /// Builds an input device attached to the process terminal.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(stdin()), stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputDevice for TerminalInput<R, W> {
    fn read(&mut self) -> Result<Cell, LmcEmulatorError> {
        loop {
            self.writer.execute(Print("Input: "))?;
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(LmcEmulatorError::DeviceIo(
                    "input closed before a value was provided".into(),
                ));
            }
            if let Ok(value) = line.trim().parse::<Cell>()
                && value <= MAX_CELL_VALUE
            {
                return Ok(value);
            }
            self.writer.execute(Print(format!(
                "Please write a number between 0 and {MAX_CELL_VALUE}\n"
            )))?;
        }
    }

    /// Nothing to rewind, the user is the state.
    fn reset(&mut self) {}
}

/// An output device which prints every value to the terminal immediately.
pub struct TerminalOutput<W> {
    writer: W,
}

impl TerminalOutput<Stdout> {
    /// Builds an output device attached to the process terminal.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputDevice for TerminalOutput<W> {
    fn write(&mut self, value: Cell) -> Result<(), LmcEmulatorError> {
        self.writer.execute(Print(format!("Output: {value}\n")))?;
        Ok(())
    }

    /// Values already shown cannot be taken back.
    fn reset(&mut self) {}
}

//! Input and output devices the machine reads from and writes to.
//!
//! The two traits are the capability contracts of the polymorphic device
//! set; each variant is an independent type and chaining is composition,
//! one device holding the next. The in-memory variants live in [`input`]
//! and [`output`], the interactive ones in [`crate::terminal`].

pub mod input;
pub mod output;

use crate::errors::LmcEmulatorError;
use crate::numbers::Cell;

/// A source of values for the 901 input instruction.
pub trait InputDevice {
    /// Returns the next value from the device.
    ///
    /// Interactive devices may block the calling thread until a value is
    /// available.
    ///
    /// # Errors
    /// - the device transport failed, e.g. the terminal went away
    fn read(&mut self) -> Result<Cell, LmcEmulatorError>;

    /// Rewinds the device to its initial state.
    fn reset(&mut self);
}

/// A sink for values emitted by the 902 output instruction.
pub trait OutputDevice {
    /// Sends `value` to the device.
    ///
    /// # Errors
    /// - the device transport failed, e.g. the terminal went away
    fn write(&mut self, value: Cell) -> Result<(), LmcEmulatorError>;

    /// Discards anything the device has accumulated.
    fn reset(&mut self);
}

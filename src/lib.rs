//! # LMC Emulator.
//!
//! `lmc-emulator` is an emulator of the Little Man Computer, a small
//! von-Neumann machine with 100 decimal memory cells, one accumulator and a
//! ten-opcode instruction set. Usage starts with composing an
//! [`emulator::Emulator`] from an input and an output device and loading a
//! program via [`emulator::Emulator::load_program`].
//!
//! # Example
//! ```
//! use lmc_emulator::devices::input::ConstantInput;
//! use lmc_emulator::devices::output::ArrayOutput;
//! use lmc_emulator::emulator::Emulator;
//!
//! let mut emu = Emulator::new(ConstantInput::new(5), ArrayOutput::new());
//! // read a value, print it, stop
//! emu.load_program(&[901, 902, 0]).unwrap();
//! emu.run().unwrap();
//! assert_eq!(emu.output().outputs(), [5]);
//! ```
//! # Errors
//! - Program longer than the 100 memory cells
//! - Device transport failure while executing an input or output instruction

pub mod devices;
pub mod emulator;
pub mod errors;
pub mod hardware;
pub mod numbers;
pub mod terminal;

//! The stateful parts of the machine: memory, accumulator and program
//! counter. They hold values, the control unit decides what happens to them.

pub mod alu;
pub mod memory;
pub mod program_counter;

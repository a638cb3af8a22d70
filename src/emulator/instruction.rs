use crate::numbers::{Cell, wrap};
use std::fmt::{Debug, Formatter};

/// The LMC operations, selected by the hundreds digit of an instruction.
///
/// Digit 4 has no operation; decoding it yields `None` and the control unit
/// treats that as a fault.
#[repr(u16)]
#[derive(enumn::N, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Opcode {
    /// Stop execution
    Halt = 0,
    /// Add a memory cell to the accumulator
    Add = 1,
    /// Subtract a memory cell from the accumulator
    Sub = 2,
    /// Store the accumulator into a memory cell
    Sta = 3,
    /// Load a memory cell into the accumulator
    Lda = 5,
    /// Branch unconditionally
    Bra = 6,
    /// Branch if the accumulator is zero
    Brz = 7,
    /// Branch if the negative flag is clear
    Brp = 8,
    /// Input to or output from the accumulator, selected by the operand
    InOut = 9,
}

/// Wrapper for one LMC instruction.
///
/// Format is the decimal `OPP`: the hundreds digit `O` selects the
/// operation, the two trailing digits `PP` are the operand, usually a
/// memory address. There is no separate instruction storage; any cell can
/// be decoded, so self-modifying programs are possible.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Instruction(Cell);

impl Instruction {
    /// Returns the operation, or `None` for the unused opcode digit.
    #[must_use]
    pub fn opcode(self) -> Option<Opcode> {
        Opcode::n(self.0 / 100)
    }

    /// Returns the two trailing digits, always in `0..100`.
    #[must_use]
    pub const fn operand(self) -> Cell {
        self.0 % 100
    }
}

impl From<Cell> for Instruction {
    fn from(value: Cell) -> Self {
        Self(wrap(value))
    }
}

impl Debug for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.opcode() {
            None => write!(f, "DAT {:03}", self.0),
            Some(opcode) => write!(f, "{opcode:?} {:02}", self.operand()),
        }
    }
}

use crate::errors::LmcEmulatorError;
use crate::numbers::{Cell, wrap};
use std::fmt::{Debug, Formatter};

/// Number of addressable cells.
pub const MEMORY_SIZE: usize = 100;

/// The LMC memory: 100 cells addressed 0 to 99, each holding one [`Cell`].
///
/// Instructions and data share the same storage, so a program is free to
/// overwrite itself while running.
pub struct Memory {
    /// Index equals memory address
    cells: [Cell; MEMORY_SIZE],
}

impl Debug for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let used = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0);
        f.debug_map().entries(used).finish()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Builds a memory with all cells set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Returns the content of the addressed cell.
    ///
    /// # Panics
    /// - `address` is not in `0..100`; unreachable through decoded
    ///   instructions, whose operand is always two digits
    #[must_use]
    pub fn read(&self, address: Cell) -> Cell {
        self.cells[usize::from(address)]
    }

    /// Replaces the content of the addressed cell with `value` reduced into
    /// the cell domain.
    ///
    /// # Panics
    /// - `address` is not in `0..100`
    pub fn write(&mut self, address: Cell, value: Cell) {
        self.cells[usize::from(address)] = wrap(value);
    }

    /// Sets every cell back to zero.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    /// Writes a program into the cells starting at address zero.
    ///
    /// Cells past the end of the program keep their previous contents.
    ///
    /// # Errors
    /// - Program too long
    pub fn load_program(&mut self, program: &[Cell]) -> Result<(), LmcEmulatorError> {
        if program.len() > MEMORY_SIZE {
            return Err(LmcEmulatorError::ProgramTooLong {
                actual_cells: program.len(),
                maximum_cells: MEMORY_SIZE,
            });
        }
        for (cell, value) in self.cells.iter_mut().zip(program) {
            *cell = wrap(*value);
        }
        Ok(())
    }
}

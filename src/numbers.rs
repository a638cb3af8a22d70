//! The value domain shared by memory cells, the accumulator and the
//! program counter.

/// A single LMC value, an integer in `[0, 999]`.
///
/// Instructions and data share this domain; an instruction is just a cell
/// interpreted as `opcode * 100 + operand`.
pub type Cell = u16;

/// Exclusive upper bound of the cell value domain.
pub const CELL_MODULUS: Cell = 1000;

/// Largest value a cell can hold.
pub const MAX_CELL_VALUE: Cell = CELL_MODULUS - 1;

/// Normalizes a value into the cell domain by modulo reduction.
///
/// Out-of-range values wrap instead of clamping, matching how the machine
/// registers overflow.
#[must_use]
pub const fn wrap(value: Cell) -> Cell {
    value % CELL_MODULUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        zero = { 0, 0 },
        in_range = { 999, 999 },
        modulus = { 1000, 0 },
        above_modulus = { 1234, 234 },
        max_u16 = { u16::MAX, 535 },
    )]
    pub fn test_wrap(value: Cell, expected: Cell) {
        assert_eq!(wrap(value), expected);
    }
}

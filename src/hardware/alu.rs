use crate::numbers::{CELL_MODULUS, Cell, wrap};

/// The ALU of the LMC: the accumulator plus the negative flag.
///
/// All arithmetic wraps modulo [`CELL_MODULUS`]. The negative flag records
/// whether the most recent [`Alu::sub`] dropped below zero before the
/// wraparound; it is the state the BRP instruction branches on, so it is
/// observable, not an internal detail.
#[derive(Debug, Default)]
pub struct Alu {
    accumulator: Cell,
    negative_flag: bool,
}

impl Alu {
    /// Builds an ALU with a zeroed accumulator and a cleared flag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulator: 0,
            negative_flag: false,
        }
    }

    /// Returns the current value of the accumulator.
    #[must_use]
    pub const fn read(&self) -> Cell {
        self.accumulator
    }

    /// Replaces the accumulator with `value` reduced into the cell domain.
    /// The negative flag is left as it was.
    pub const fn write(&mut self, value: Cell) {
        self.accumulator = wrap(value);
    }

    /// Adds `value` to the accumulator, wrapping around. The negative flag
    /// is left as it was.
    pub const fn add(&mut self, value: Cell) {
        self.accumulator = wrap(self.accumulator + wrap(value));
    }

    /// Subtracts `value` from the accumulator.
    ///
    /// On underflow the result wraps back into the cell domain and the
    /// negative flag is set; otherwise the flag is cleared.
    pub const fn sub(&mut self, value: Cell) {
        let value = wrap(value);
        if self.accumulator < value {
            self.negative_flag = true;
            self.accumulator = self.accumulator + CELL_MODULUS - value;
        } else {
            self.negative_flag = false;
            self.accumulator -= value;
        }
    }

    /// Zeroes the accumulator and clears the negative flag.
    pub const fn reset(&mut self) {
        self.accumulator = 0;
        self.negative_flag = false;
    }

    #[must_use]
    pub const fn negative_flag(&self) -> bool {
        self.negative_flag
    }

    /// Overrides the negative flag, the hook a front-end uses to mirror
    /// user edits back into the machine.
    pub const fn set_negative_flag(&mut self, value: bool) {
        self.negative_flag = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use googletest::prelude::*;
    use yare::parameterized;

    #[gtest]
    pub fn test_read_new_alu() {
        let alu = Alu::new();
        expect_that!(alu.read(), eq(0));
        expect_that!(alu.negative_flag(), eq(false));
    }

    #[parameterized(
        in_range = { 100, 100 },
        wraps = { 1234, 234 },
    )]
    pub fn test_read_after_write(value: Cell, expected: Cell) {
        let mut alu = Alu::new();
        alu.write(value);
        assert_eq!(alu.read(), expected);
    }

    #[gtest]
    pub fn test_write_keeps_negative_flag() {
        let mut alu = Alu::new();
        alu.set_negative_flag(true);
        alu.write(100);
        expect_that!(alu.negative_flag(), eq(true));
    }

    #[gtest]
    pub fn test_reset() {
        let mut alu = Alu::new();
        alu.write(100);
        alu.set_negative_flag(true);
        alu.reset();
        expect_that!(alu.read(), eq(0));
        expect_that!(alu.negative_flag(), eq(false));
    }

    #[parameterized(
        add = { 100, 200, 300 },
        addwrap = { 800, 250, 50 },
    )]
    pub fn test_add(start: Cell, value: Cell, expected: Cell) {
        let mut alu = Alu::new();
        alu.write(start);
        alu.add(value);
        assert_eq!(alu.read(), expected);
    }

    #[gtest]
    pub fn test_add_keeps_negative_flag() {
        let mut alu = Alu::new();
        alu.set_negative_flag(true);
        alu.add(100);
        expect_that!(alu.negative_flag(), eq(true));
    }

    #[gtest]
    pub fn test_sub() {
        let mut alu = Alu::new();
        alu.write(300);
        alu.sub(200);
        expect_that!(alu.read(), eq(100));
        expect_that!(alu.negative_flag(), eq(false));
    }

    #[gtest]
    pub fn test_subwrap() {
        let mut alu = Alu::new();
        alu.write(200);
        alu.sub(350);
        expect_that!(alu.read(), eq(850));
        expect_that!(alu.negative_flag(), eq(true));
    }

    #[gtest]
    pub fn test_sub_clears_negative_flag() {
        let mut alu = Alu::new();
        alu.write(200);
        alu.sub(350);
        expect_that!(alu.negative_flag(), eq(true));
        alu.write(300);
        alu.sub(200);
        expect_that!(alu.read(), eq(100));
        expect_that!(alu.negative_flag(), eq(false));
    }

    #[gtest]
    pub fn test_sub_to_zero_is_not_negative() {
        let mut alu = Alu::new();
        alu.write(200);
        alu.sub(200);
        expect_that!(alu.read(), eq(0));
        expect_that!(alu.negative_flag(), eq(false));
    }
}

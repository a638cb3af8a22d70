use crate::numbers::{Cell, wrap};

/// The program counter.
///
/// It counts over the full cell domain, wrapping modulo 1000 like every
/// other register, even though only addresses 0 to 99 exist. Decoded
/// operands can never leave that range; a direct [`ProgramCounter::write`]
/// can, and the control unit treats fetching from such an address as a
/// fault.
#[derive(Debug, Default)]
pub struct ProgramCounter {
    value: Cell,
}

impl ProgramCounter {
    /// Builds a program counter initialized to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Returns the current value.
    #[must_use]
    pub const fn read(&self) -> Cell {
        self.value
    }

    /// Replaces the current value with `value` reduced into the cell domain.
    pub const fn write(&mut self, value: Cell) {
        self.value = wrap(value);
    }

    /// Advances by one, wrapping around at the end of the cell domain.
    pub const fn increment(&mut self) {
        self.value = wrap(self.value + 1);
    }

    /// Sets the counter back to zero.
    pub const fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use googletest::prelude::*;

    #[gtest]
    pub fn test_read_after_new() {
        expect_that!(ProgramCounter::new().read(), eq(0));
    }

    #[gtest]
    pub fn test_read_after_write() {
        let mut pc = ProgramCounter::new();
        pc.write(100);
        expect_that!(pc.read(), eq(100));
        pc.write(1005);
        expect_that!(pc.read(), eq(5));
    }

    #[gtest]
    pub fn test_increment() {
        let mut pc = ProgramCounter::new();
        pc.write(100);
        pc.increment();
        expect_that!(pc.read(), eq(101));
    }

    #[gtest]
    pub fn test_increment_wraps() {
        let mut pc = ProgramCounter::new();
        pc.write(999);
        pc.increment();
        expect_that!(pc.read(), eq(0));
    }

    #[gtest]
    pub fn test_reset() {
        let mut pc = ProgramCounter::new();
        pc.write(100);
        pc.reset();
        expect_that!(pc.read(), eq(0));
    }
}

use crate::devices::OutputDevice;
use crate::errors::LmcEmulatorError;
use crate::numbers::Cell;

/// An output device which keeps every written value in an internal log.
#[derive(Debug, Default)]
pub struct ArrayOutput {
    values: Vec<Cell>,
}

impl ArrayOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns a copy of the values written so far.
    ///
    /// A copy rather than a borrow, so a snapshot taken here is unaffected
    /// by later writes.
    #[must_use]
    pub fn outputs(&self) -> Vec<Cell> {
        self.values.clone()
    }
}

impl OutputDevice for ArrayOutput {
    fn write(&mut self, value: Cell) -> Result<(), LmcEmulatorError> {
        self.values.push(value);
        Ok(())
    }

    /// Empties the log.
    fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use googletest::prelude::*;

    #[gtest]
    pub fn test_write() {
        let mut output = ArrayOutput::new();
        output.write(2).unwrap();
        output.write(34).unwrap();
        let snapshot = output.outputs();
        assert_that!(snapshot, eq(&vec![2, 34]));
        output.write(999).unwrap();
        // the earlier snapshot is unaffected
        expect_that!(snapshot, eq(&vec![2, 34]));
        expect_that!(output.outputs(), eq(&vec![2, 34, 999]));
    }

    #[gtest]
    pub fn test_write_and_reset() {
        let mut output = ArrayOutput::new();
        output.write(2).unwrap();
        output.write(34).unwrap();
        let snapshot = output.outputs();
        output.reset();
        output.write(10).unwrap();
        expect_that!(snapshot, eq(&vec![2, 34]));
        expect_that!(output.outputs(), eq(&vec![10]));
    }
}

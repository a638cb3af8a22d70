use crate::devices::InputDevice;
use crate::errors::LmcEmulatorError;
use crate::numbers::Cell;

/// An input device which always supplies the same value.
#[derive(Debug)]
pub struct ConstantInput {
    value: Cell,
}

impl ConstantInput {
    #[must_use]
    pub const fn new(value: Cell) -> Self {
        Self { value }
    }
}

impl InputDevice for ConstantInput {
    fn read(&mut self) -> Result<Cell, LmcEmulatorError> {
        Ok(self.value)
    }

    /// Nothing to rewind.
    fn reset(&mut self) {}
}

/// An input device which supplies values from a queue, in order.
///
/// Once the queue is exhausted every further read is delegated to the
/// chained fallback device.
pub struct ArrayInput {
    values: Vec<Cell>,
    cursor: usize,
    chained: Box<dyn InputDevice>,
}

impl ArrayInput {
    pub fn new(values: Vec<Cell>, chained: impl InputDevice + 'static) -> Self {
        Self {
            values,
            cursor: 0,
            chained: Box::new(chained),
        }
    }
}

impl InputDevice for ArrayInput {
    fn read(&mut self) -> Result<Cell, LmcEmulatorError> {
        if let Some(value) = self.values.get(self.cursor) {
            self.cursor += 1;
            Ok(*value)
        } else {
            self.chained.read()
        }
    }

    /// Rewinds the cursor to the first queued value and forwards the reset
    /// to the chained device.
    fn reset(&mut self) {
        self.cursor = 0;
        self.chained.reset();
    }
}

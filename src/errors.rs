use displaydoc::Display;
use std::io;

#[derive(Display, Debug)]
pub enum LmcEmulatorError {
    /// Program too long, got {actual_cells:?} cells while memory holds {maximum_cells:?}
    ProgramTooLong {
        actual_cells: usize,
        maximum_cells: usize,
    },
    /// Error during reading device input or writing device output: {0}
    DeviceIo(String),
}

impl std::error::Error for LmcEmulatorError {}

impl From<io::Error> for LmcEmulatorError {
    fn from(error: io::Error) -> Self {
        Self::DeviceIo(error.to_string())
    }
}

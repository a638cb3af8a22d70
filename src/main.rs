use lmc_emulator::emulator::Emulator;
use lmc_emulator::errors::LmcEmulatorError;
use lmc_emulator::terminal::{TerminalInput, TerminalOutput};

/// Reads two values from the terminal and prints their sum.
const ADD_TWO: &[u16] = &[901, 310, 901, 110, 902, 0];

fn main() -> Result<(), LmcEmulatorError> {
    let mut emu = Emulator::new(TerminalInput::stdio(), TerminalOutput::stdio());
    emu.load_program(ADD_TWO)?;
    emu.run()
}

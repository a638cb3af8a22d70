//! Adds two queued input values without touching a terminal, the headless
//! way a test harness would drive the machine.

use lmc_emulator::devices::input::{ArrayInput, ConstantInput};
use lmc_emulator::devices::output::ArrayOutput;
use lmc_emulator::emulator::Emulator;
use lmc_emulator::errors::LmcEmulatorError;

/// ```text
/// 00 INP        first value
/// 01 STA 10
/// 02 INP        second value
/// 03 ADD 10
/// 04 OUT
/// 05 HLT
/// ```
const ADD_TWO: &[u16] = &[901, 310, 901, 110, 902, 0];

fn main() -> Result<(), LmcEmulatorError> {
    let input = ArrayInput::new(vec![320, 54], ConstantInput::new(0));
    let mut emu = Emulator::new(input, ArrayOutput::new());
    emu.load_program(ADD_TWO)?;
    emu.run()?;
    println!("320 + 54 = {:?}", emu.output().outputs());
    Ok(())
}

//! Asks for a start value and counts it down to zero, tracing every
//! executed instruction through the step hook.

use lmc_emulator::devices::output::ArrayOutput;
use lmc_emulator::emulator::Emulator;
use lmc_emulator::errors::LmcEmulatorError;
use lmc_emulator::terminal::TerminalInput;

/// ```text
/// 00 INP        read the start value
/// 01 OUT        print the current value
/// 02 SUB 09     subtract the constant one
/// 03 BRP 01     keep going while not below zero
/// 04 HLT
/// 09 DAT 1
/// ```
const COUNTDOWN: &[u16] = &[901, 902, 209, 801, 0, 0, 0, 0, 0, 1];

fn main() -> Result<(), LmcEmulatorError> {
    let mut emu = Emulator::new(TerminalInput::stdio(), ArrayOutput::new());
    emu.load_program(COUNTDOWN)?;
    emu.set_step_hook(|event| {
        println!(
            "pc {:03}  acc {:03}  neg {}  halted {}",
            event.program_counter, event.accumulator, event.negative_flag, event.halted
        );
    });
    emu.run()?;
    println!("outputs: {:?}", emu.output().outputs());
    Ok(())
}

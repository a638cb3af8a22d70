//! The composed machine and its fetch-decode-execute core.

pub mod control_unit;
pub mod instruction;
pub mod opcodes;

use crate::devices::{InputDevice, OutputDevice};
use crate::emulator::control_unit::ControlUnit;
use crate::errors::LmcEmulatorError;
use crate::hardware::alu::Alu;
use crate::hardware::memory::Memory;
use crate::hardware::program_counter::ProgramCounter;
use crate::numbers::Cell;

/// Snapshot of the machine state after one executed instruction.
///
/// This is what a front-end receives through the step hook; it carries
/// values, not references, so holding on to one is safe.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepEvent {
    pub program_counter: Cell,
    pub accumulator: Cell,
    pub negative_flag: bool,
    pub halted: bool,
}

type StepHook = Box<dyn FnMut(&StepEvent)>;

/// The public facing Little Man Computer.
///
/// Composes memory, accumulator and program counter with the two devices
/// supplied by the caller and a control unit wired to all of them. Usage
/// starts with [`Emulator::load_program`], then [`Emulator::run`] or
/// repeated [`Emulator::step`] calls.
pub struct Emulator<I, O> {
    control_unit: ControlUnit<I, O>,
    step_hook: Option<StepHook>,
}

impl<I: InputDevice, O: OutputDevice> Emulator<I, O> {
    /// Builds a machine around the given devices, everything zeroed.
    pub fn new(input: I, output: O) -> Self {
        Self {
            control_unit: ControlUnit::new(
                Memory::new(),
                ProgramCounter::new(),
                Alu::new(),
                input,
                output,
            ),
            step_hook: None,
        }
    }

    /// Loads a program into memory starting at address zero.
    ///
    /// # Errors
    /// - Program too long
    pub fn load_program(&mut self, program: &[Cell]) -> Result<(), LmcEmulatorError> {
        self.control_unit.memory_mut().load_program(program)
    }

    /// Executes one instruction and reports the new state to the step hook.
    ///
    /// On a halted machine this is a no-op and the hook stays silent, so a
    /// front-end stepping past HLT sees no duplicate events.
    ///
    /// # Errors
    /// - a device transport failed during an input or output instruction
    pub fn step(&mut self) -> Result<(), LmcEmulatorError> {
        if self.control_unit.is_halted() {
            return Ok(());
        }
        self.control_unit.execute_one()?;
        self.notify();
        Ok(())
    }

    /// Runs the machine until it halts, one [`Self::step`] at a time.
    ///
    /// Like [`ControlUnit::execute`] this loop has no step limit.
    ///
    /// # Errors
    /// - a device transport failed during an input or output instruction
    pub fn run(&mut self) -> Result<(), LmcEmulatorError> {
        while !self.control_unit.is_halted() {
            self.step()?;
        }
        Ok(())
    }

    /// Returns the machine to its power-on execution state while keeping
    /// memory intact, so the loaded program survives the reset.
    ///
    /// Program counter, accumulator, negative flag and the halted state are
    /// cleared; the input device rewinds and the output device drops its
    /// history.
    pub fn reset(&mut self) {
        self.control_unit.program_counter_mut().reset();
        self.control_unit.alu_mut().reset();
        self.control_unit.input_mut().reset();
        self.control_unit.output_mut().reset();
        self.control_unit.reset();
    }

    /// Registers a hook called after every executed instruction.
    ///
    /// This is the seam a front-end binds to for mirroring machine state
    /// into widgets without the core knowing about any display.
    pub fn set_step_hook(&mut self, hook: impl FnMut(&StepEvent) + 'static) {
        self.step_hook = Some(Box::new(hook));
    }

    fn notify(&mut self) {
        if let Some(hook) = self.step_hook.as_mut() {
            let event = StepEvent {
                program_counter: self.control_unit.program_counter().read(),
                accumulator: self.control_unit.alu().read(),
                negative_flag: self.control_unit.alu().negative_flag(),
                halted: self.control_unit.is_halted(),
            };
            hook(&event);
        }
    }

    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.control_unit.is_halted()
    }

    #[must_use]
    pub const fn memory(&self) -> &Memory {
        self.control_unit.memory()
    }

    pub const fn memory_mut(&mut self) -> &mut Memory {
        self.control_unit.memory_mut()
    }

    #[must_use]
    pub const fn alu(&self) -> &Alu {
        self.control_unit.alu()
    }

    pub const fn alu_mut(&mut self) -> &mut Alu {
        self.control_unit.alu_mut()
    }

    #[must_use]
    pub const fn program_counter(&self) -> &ProgramCounter {
        self.control_unit.program_counter()
    }

    pub const fn program_counter_mut(&mut self) -> &mut ProgramCounter {
        self.control_unit.program_counter_mut()
    }

    pub const fn input_mut(&mut self) -> &mut I {
        self.control_unit.input_mut()
    }

    #[must_use]
    pub const fn output(&self) -> &O {
        self.control_unit.output()
    }
}

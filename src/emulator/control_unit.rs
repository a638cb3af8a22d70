use crate::devices::{InputDevice, OutputDevice};
use crate::emulator::instruction::{Instruction, Opcode};
use crate::emulator::opcodes;
use crate::errors::LmcEmulatorError;
use crate::hardware::alu::Alu;
use crate::hardware::memory::{MEMORY_SIZE, Memory};
use crate::hardware::program_counter::ProgramCounter;

/// The control unit: drives the fetch-decode-execute cycle over the parts
/// injected at construction, which it owns exclusively.
///
/// A two-state machine: running or halted. HALT, an unknown instruction and
/// a fetch from a nonexistent address all end in the halted state; a running
/// program can stop the machine but never crash it. Only [`ControlUnit::reset`]
/// leaves the halted state again.
#[derive(Debug)]
pub struct ControlUnit<I, O> {
    memory: Memory,
    pc: ProgramCounter,
    alu: Alu,
    input: I,
    output: O,
    halted: bool,
}

impl<I: InputDevice, O: OutputDevice> ControlUnit<I, O> {
    pub const fn new(
        memory: Memory,
        pc: ProgramCounter,
        alu: Alu,
        input: I,
        output: O,
    ) -> Self {
        Self {
            memory,
            pc,
            alu,
            input,
            output,
            halted: false,
        }
    }

    /// Executes a single instruction; a no-op when already halted.
    ///
    /// Fetches the cell the program counter addresses, advances the counter,
    /// then dispatches on the decoded operation, so branch operations
    /// overwrite the default advance.
    ///
    /// # Errors
    /// - a device transport failed during an input or output instruction
    pub fn execute_one(&mut self) -> Result<(), LmcEmulatorError> {
        if self.halted {
            return Ok(());
        }
        let address = self.pc.read();
        if usize::from(address) >= MEMORY_SIZE {
            // only reachable by writing the counter directly
            self.fault();
            return Ok(());
        }
        let instruction = Instruction::from(self.memory.read(address));
        self.pc.increment();
        let operand = instruction.operand();
        match instruction.opcode() {
            Some(Opcode::Halt) => self.halted = true,
            Some(Opcode::Add) => opcodes::add(operand, &mut self.alu, &self.memory),
            Some(Opcode::Sub) => opcodes::sub(operand, &mut self.alu, &self.memory),
            Some(Opcode::Sta) => opcodes::sta(operand, &self.alu, &mut self.memory),
            Some(Opcode::Lda) => opcodes::lda(operand, &mut self.alu, &self.memory),
            Some(Opcode::Bra) => opcodes::bra(operand, &mut self.pc),
            Some(Opcode::Brz) => opcodes::brz(operand, &self.alu, &mut self.pc),
            Some(Opcode::Brp) => opcodes::brp(operand, &self.alu, &mut self.pc),
            Some(Opcode::InOut) => match operand {
                1 => opcodes::inp(&mut self.alu, &mut self.input)?,
                2 => opcodes::out(&self.alu, &mut self.output)?,
                _ => self.fault(),
            },
            None => self.fault(),
        }
        Ok(())
    }

    /// Executes instructions until the halted state is reached.
    ///
    /// There is no step limit: a program that never halts keeps this loop
    /// running forever. Callers needing a bound drive [`Self::execute_one`]
    /// themselves.
    ///
    /// # Errors
    /// - a device transport failed during an input or output instruction
    pub fn execute(&mut self) -> Result<(), LmcEmulatorError> {
        while !self.halted {
            self.execute_one()?;
        }
        Ok(())
    }

    /// An unknown instruction stops the machine instead of crashing it.
    const fn fault(&mut self) {
        self.halted = true;
    }

    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Leaves the halted state. The owning machine resets the other parts.
    pub const fn reset(&mut self) {
        self.halted = false;
    }

    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    pub const fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    #[must_use]
    pub const fn alu(&self) -> &Alu {
        &self.alu
    }

    pub const fn alu_mut(&mut self) -> &mut Alu {
        &mut self.alu
    }

    #[must_use]
    pub const fn program_counter(&self) -> &ProgramCounter {
        &self.pc
    }

    pub const fn program_counter_mut(&mut self) -> &mut ProgramCounter {
        &mut self.pc
    }

    pub const fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

//! Implemented operations of the LMC.
//!
//! Each operation works on the parts it needs and nothing else; the control
//! unit decides which one runs. `PP` in the format lines is the two-digit
//! operand taken from the instruction.

use crate::devices::{InputDevice, OutputDevice};
use crate::errors::LmcEmulatorError;
use crate::hardware::alu::Alu;
use crate::hardware::memory::Memory;
use crate::hardware::program_counter::ProgramCounter;
use crate::numbers::Cell;

/// ADD: adds the content of the addressed cell to the accumulator.
/// ```text
/// 1PP
/// ```
/// The negative flag is left alone, even when the addition wraps.
pub fn add(operand: Cell, alu: &mut Alu, memory: &Memory) {
    alu.add(memory.read(operand));
}

/// SUB: subtracts the content of the addressed cell from the accumulator.
/// ```text
/// 2PP
/// ```
/// Sets the negative flag on underflow and clears it otherwise, see
/// [`Alu::sub`].
pub fn sub(operand: Cell, alu: &mut Alu, memory: &Memory) {
    alu.sub(memory.read(operand));
}

/// STA: stores the accumulator into the addressed cell.
/// ```text
/// 3PP
/// ```
pub fn sta(operand: Cell, alu: &Alu, memory: &mut Memory) {
    memory.write(operand, alu.read());
}

/// LDA: loads the addressed cell into the accumulator.
/// ```text
/// 5PP
/// ```
pub fn lda(operand: Cell, alu: &mut Alu, memory: &Memory) {
    alu.write(memory.read(operand));
}

/// BRA: branches unconditionally to the operand address.
/// ```text
/// 6PP
/// ```
/// Overwrites the advance the fetch already applied.
pub const fn bra(operand: Cell, pc: &mut ProgramCounter) {
    pc.write(operand);
}

/// BRZ: branches to the operand address if the accumulator is zero.
/// ```text
/// 7PP
/// ```
pub const fn brz(operand: Cell, alu: &Alu, pc: &mut ProgramCounter) {
    if alu.read() == 0 {
        pc.write(operand);
    }
}

/// BRP: branches to the operand address if the negative flag is clear.
/// ```text
/// 8PP
/// ```
/// The branch looks at the flag left by the last subtraction, not at the
/// current sign of the accumulator value.
pub const fn brp(operand: Cell, alu: &Alu, pc: &mut ProgramCounter) {
    if !alu.negative_flag() {
        pc.write(operand);
    }
}

/// INP: reads the next value from the input device into the accumulator.
/// ```text
/// 901
/// ```
///
/// # Errors
/// - the input device transport failed
pub fn inp(alu: &mut Alu, input: &mut impl InputDevice) -> Result<(), LmcEmulatorError> {
    alu.write(input.read()?);
    Ok(())
}

/// OUT: writes the accumulator to the output device.
/// ```text
/// 902
/// ```
///
/// # Errors
/// - the output device transport failed
pub fn out(alu: &Alu, output: &mut impl OutputDevice) -> Result<(), LmcEmulatorError> {
    output.write(alu.read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::input::ConstantInput;
    use crate::devices::output::ArrayOutput;
    use googletest::prelude::*;

    fn memory_with(address: Cell, value: Cell) -> Memory {
        let mut memory = Memory::new();
        memory.write(address, value);
        memory
    }

    #[gtest]
    pub fn test_opcode_add() {
        let mut alu = Alu::new();
        alu.write(100);
        add(20, &mut alu, &memory_with(20, 200));
        expect_that!(alu.read(), eq(300));
        expect_that!(alu.negative_flag(), eq(false));
    }

    #[gtest]
    pub fn test_opcode_sub_underflow_sets_flag() {
        let mut alu = Alu::new();
        alu.write(200);
        sub(30, &mut alu, &memory_with(30, 350));
        expect_that!(alu.read(), eq(850));
        expect_that!(alu.negative_flag(), eq(true));
    }

    #[gtest]
    pub fn test_opcode_sta() {
        let mut alu = Alu::new();
        alu.write(650);
        let mut memory = Memory::new();
        sta(20, &alu, &mut memory);
        expect_that!(memory.read(20), eq(650));
    }

    #[gtest]
    pub fn test_opcode_lda() {
        let mut alu = Alu::new();
        lda(20, &mut alu, &memory_with(20, 709));
        expect_that!(alu.read(), eq(709));
    }

    #[gtest]
    pub fn test_opcode_bra() {
        let mut pc = ProgramCounter::new();
        pc.write(10);
        bra(42, &mut pc);
        expect_that!(pc.read(), eq(42));
    }

    #[gtest]
    pub fn test_opcode_brz() {
        let mut alu = Alu::new();
        let mut pc = ProgramCounter::new();
        brz(42, &alu, &mut pc);
        expect_that!(pc.read(), eq(42));

        alu.write(1);
        brz(77, &alu, &mut pc);
        expect_that!(pc.read(), eq(42));
    }

    #[gtest]
    pub fn test_opcode_brp_follows_the_flag() {
        let mut alu = Alu::new();
        let mut pc = ProgramCounter::new();

        // underflowed subtraction, flag set: no branch
        alu.write(200);
        alu.sub(350);
        brp(42, &alu, &mut pc);
        expect_that!(pc.read(), eq(0));

        // clean subtraction, flag clear: branch
        alu.write(300);
        alu.sub(200);
        brp(42, &alu, &mut pc);
        expect_that!(pc.read(), eq(42));
    }

    #[gtest]
    pub fn test_opcode_inp() {
        let mut alu = Alu::new();
        let mut input = ConstantInput::new(23);
        inp(&mut alu, &mut input).unwrap();
        expect_that!(alu.read(), eq(23));
    }

    #[gtest]
    pub fn test_opcode_out() {
        let mut alu = Alu::new();
        alu.write(300);
        let mut output = ArrayOutput::new();
        out(&alu, &mut output).unwrap();
        expect_that!(output.outputs(), eq(&vec![300]));
    }
}

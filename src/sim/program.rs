//! Instruction store.
//!
//! Encoded instructions are laid out contiguously from address 0, one word
//! every [`INST_SIZE`] bytes, and fetched by program counter.

use serde::Serialize;

/// Size in bytes of one encoded instruction.
pub const INST_SIZE: u64 = 4;

/// A 32-bit instruction word at a byte address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncodedInstruction {
    /// Byte address of the instruction.
    pub address: u64,
    /// 32-bit encoding.
    pub word: u32,
}

/// Ordered sequence of encoded instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    insts: Vec<EncodedInstruction>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a program from raw words placed at consecutive addresses.
    pub fn from_words<I: IntoIterator<Item = u32>>(words: I) -> Self {
        let mut program = Self::new();
        for word in words {
            program.push(word);
        }
        program
    }

    /// Appends a word at the next free address and returns that address.
    pub fn push(&mut self, word: u32) -> u64 {
        let address = self.insts.len() as u64 * INST_SIZE;
        self.insts.push(EncodedInstruction { address, word });
        address
    }

    /// Returns the instruction at `pc`, if `pc` names one.
    pub fn fetch(&self, pc: u64) -> Option<&EncodedInstruction> {
        if pc % INST_SIZE != 0 {
            return None;
        }
        usize::try_from(pc / INST_SIZE)
            .ok()
            .and_then(|idx| self.insts.get(idx))
    }

    /// Address of the last instruction, `None` for an empty program.
    pub fn last_address(&self) -> Option<u64> {
        self.insts.last().map(|inst| inst.address)
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.insts.len()
    }

    /// Returns `true` if the program holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }

    /// Iterates over the instructions in address order.
    pub fn iter(&self) -> std::slice::Iter<'_, EncodedInstruction> {
        self.insts.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a EncodedInstruction;
    type IntoIter = std::slice::Iter<'a, EncodedInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code constants for the supported subset
//! of RV64I (register arithmetic, immediate arithmetic, loads, stores and
//! conditional branches), field extraction, immediate generation, and the
//! text encoder that produces the binary words the pipeline consumes.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Text assembler producing 32-bit instruction words.
pub mod encoder;

/// Function codes (funct3) for the supported instruction classes.
pub mod funct3;

/// Function codes (funct7) for the supported instruction classes.
pub mod funct7;

/// Immediate generation from displaced instruction bitfields.
pub mod imm;

/// Instruction bit extraction utilities.
pub mod instruction;

/// Major opcodes (bits 6-0).
pub mod opcodes;

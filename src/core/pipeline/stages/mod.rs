//! Pipeline stage implementations.
//!
//! Contains the five stages of the instruction pipeline:
//! - Fetch: Retrieves the next word from the instruction store
//! - Decode: Decodes fields, reads registers and detects load-use hazards
//! - Execute: Resolves forwarded operands and runs the ALU
//! - Memory: Handles load/store operations
//! - Writeback: Writes results back to registers and retires the slot

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;

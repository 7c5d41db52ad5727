//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps the architectural names (`x0`-`x31`) and the calling-convention
//! aliases (`zero`, `ra`, `sp`, ...) to register indices.

/// Register x0 (zero register).
pub const REG_ZERO: usize = 0;

/// Number of integer registers.
pub const NUM_REGS: usize = 32;

/// ABI names indexed by register number.
pub const ABI_NAMES: [&str; NUM_REGS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Parses a register name into its index.
///
/// Accepts `x0`-`x31`, the ABI aliases, and `fp` as an alias for `s0`.
/// Returns `None` for anything else.
pub fn parse_register(name: &str) -> Option<usize> {
    let name = name.trim();
    if let Some(num) = name.strip_prefix('x') {
        if num.is_empty() || num.len() > 2 || (num.len() == 2 && num.starts_with('0')) {
            return None;
        }
        return num.parse::<usize>().ok().filter(|&idx| idx < NUM_REGS);
    }
    if name == "fp" {
        return Some(8);
    }
    ABI_NAMES.iter().position(|&abi| abi == name)
}

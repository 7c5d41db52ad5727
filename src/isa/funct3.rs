//! funct3 codes for the supported RV64I instruction classes.
//!
//! Loads are decoded but their width is not modelled: every load moves a
//! doubleword. The arithmetic codes are shared by the register and immediate
//! forms.

// Loads

/// Load Byte (signed).
pub const LB: u32 = 0b000;
/// Load Halfword (signed).
pub const LH: u32 = 0b001;
/// Load Word (signed).
pub const LW: u32 = 0b010;
/// Load Doubleword.
pub const LD: u32 = 0b011;
/// Load Byte Unsigned.
pub const LBU: u32 = 0b100;
/// Load Halfword Unsigned.
pub const LHU: u32 = 0b101;
/// Load Word Unsigned.
pub const LWU: u32 = 0b110;

// Stores

/// Store Byte.
pub const SB: u32 = 0b000;
/// Store Halfword.
pub const SH: u32 = 0b001;
/// Store Word.
pub const SW: u32 = 0b010;
/// Store Doubleword.
pub const SD: u32 = 0b011;

// Branches

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;
/// Branch Less Than (signed).
pub const BLT: u32 = 0b100;
/// Branch Greater or Equal (signed).
pub const BGE: u32 = 0b101;
/// Branch Less Than Unsigned.
pub const BLTU: u32 = 0b110;
/// Branch Greater or Equal Unsigned.
pub const BGEU: u32 = 0b111;

// Arithmetic and logic

/// Add / Subtract (distinguished by funct7).
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Set Less Than.
pub const SLT: u32 = 0b010;
/// Set Less Than Unsigned.
pub const SLTU: u32 = 0b011;
/// Exclusive OR.
pub const XOR: u32 = 0b100;
/// Shift Right (logical or arithmetic, distinguished by funct7).
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;

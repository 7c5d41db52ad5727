//! Tests for the register file and data memory.

use riscv_pipesim::common::{AccessType, SimError};
use riscv_pipesim::core::arch::dmem::{DataMemory, DEFAULT_DATA_SIZE};
use riscv_pipesim::core::arch::gpr::Gpr;

/// Tests GPR read/write operations.
#[test]
fn test_gpr_read_write() {
    let mut gpr = Gpr::default();
    gpr.write(1, 0x1234).unwrap();
    gpr.write(31, -7).unwrap();
    assert_eq!(gpr.read(1), Ok(0x1234));
    assert_eq!(gpr.read(31), Ok(-7));
    assert_eq!(gpr.read(2), Ok(0));
}

/// Tests that x0 ignores writes when enforced.
#[test]
fn test_gpr_zero_enforced() {
    let mut gpr = Gpr::new(true);
    assert!(gpr.enforces_zero());
    gpr.write(0, 99).unwrap();
    assert_eq!(gpr.read(0), Ok(0));
}

/// Tests that x0 stores writes under the legacy policy.
#[test]
fn test_gpr_zero_legacy() {
    let mut gpr = Gpr::new(false);
    assert!(!gpr.enforces_zero());
    gpr.write(0, 99).unwrap();
    assert_eq!(gpr.read(0), Ok(99));
    assert_eq!(gpr.snapshot()[0], 99);
}

/// Tests out-of-range register indices.
#[test]
fn test_gpr_out_of_range() {
    let mut gpr = Gpr::default();
    assert_eq!(gpr.read(32), Err(SimError::RegisterOutOfRange(32)));
    assert_eq!(gpr.write(40, 1), Err(SimError::RegisterOutOfRange(40)));
}

/// Tests little-endian doubleword storage.
#[test]
fn test_dmem_little_endian() {
    let mut mem = DataMemory::default();
    assert_eq!(mem.len(), DEFAULT_DATA_SIZE);
    mem.store_doubleword(40, 0x0102_0304_0506_0708).unwrap();
    assert_eq!(mem.bytes()[40], 0x08);
    assert_eq!(mem.bytes()[47], 0x01);
    assert_eq!(mem.load_doubleword(40), Ok(0x0102_0304_0506_0708));
    // Unaligned accesses overlap neighbouring bytes.
    assert_eq!(mem.load_doubleword(41), Ok(0x0001_0203_0405_0607));
}

/// Tests negative values survive a store and load.
#[test]
fn test_dmem_negative() {
    let mut mem = DataMemory::new(16);
    mem.store_doubleword(8, -27).unwrap();
    assert_eq!(mem.load_doubleword(8), Ok(-27));
    assert_eq!(mem.nonzero_bytes().count(), 8);
}

/// Tests bounds checks on both ends of memory.
#[test]
fn test_dmem_out_of_range() {
    let mut mem = DataMemory::new(64);
    assert!(mem.load_doubleword(56).is_ok());
    assert_eq!(
        mem.load_doubleword(57),
        Err(SimError::MemoryOutOfRange {
            addr: 57,
            len: 8,
            access: AccessType::Read
        })
    );
    assert_eq!(
        mem.store_doubleword(-8, 1),
        Err(SimError::MemoryOutOfRange {
            addr: -8,
            len: 8,
            access: AccessType::Write
        })
    );
    assert_eq!(
        mem.load_doubleword(i64::MAX).unwrap_err().to_string(),
        format!("data memory read of 8 bytes at {} is out of range", i64::MAX)
    );
}

/// Tests the non-zero byte iterator.
#[test]
fn test_dmem_nonzero_bytes() {
    let mut mem = DataMemory::new(32);
    mem.store_doubleword(0, 100).unwrap();
    mem.store_doubleword(16, 0x0200).unwrap();
    let bytes: Vec<_> = mem.nonzero_bytes().collect();
    assert_eq!(bytes, vec![(0, 100), (17, 2)]);
}

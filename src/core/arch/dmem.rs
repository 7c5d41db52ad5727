//! Byte-addressable data memory.
//!
//! Doublewords are stored little-endian. Every access is bounds-checked and
//! fails fast with [`SimError::MemoryOutOfRange`].

use crate::common::{AccessType, SimError};

/// Size in bytes of a doubleword access.
pub const DOUBLEWORD: usize = 8;

/// Default data memory size in bytes.
pub const DEFAULT_DATA_SIZE: usize = 1024;

/// Flat byte-addressable data memory.
#[derive(Clone, Debug)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_SIZE)
    }
}

impl DataMemory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the memory size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the raw byte contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn range(&self, addr: i64, access: AccessType) -> Result<std::ops::Range<usize>, SimError> {
        let fault = SimError::MemoryOutOfRange {
            addr,
            len: DOUBLEWORD,
            access,
        };
        let start = usize::try_from(addr).map_err(|_| fault.clone())?;
        let end = start.checked_add(DOUBLEWORD).ok_or_else(|| fault.clone())?;
        if end > self.bytes.len() {
            return Err(fault);
        }
        Ok(start..end)
    }

    /// Loads a little-endian 64-bit value starting at `addr`.
    pub fn load_doubleword(&self, addr: i64) -> Result<i64, SimError> {
        let range = self.range(addr, AccessType::Read)?;
        let mut buf = [0u8; DOUBLEWORD];
        buf.copy_from_slice(&self.bytes[range]);
        Ok(i64::from_le_bytes(buf))
    }

    /// Stores a 64-bit value little-endian starting at `addr`.
    pub fn store_doubleword(&mut self, addr: i64, data: i64) -> Result<(), SimError> {
        let range = self.range(addr, AccessType::Write)?;
        self.bytes[range].copy_from_slice(&data.to_le_bytes());
        Ok(())
    }

    /// Iterates over `(offset, byte)` for every non-zero byte.
    pub fn nonzero_bytes(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.bytes
            .iter()
            .enumerate()
            .filter(|(_, &b)| b != 0)
            .map(|(i, &b)| (i, b))
    }
}

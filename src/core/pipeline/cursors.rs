//! Stage cursors.
//!
//! Each stage owns a cursor naming the program-order index of the
//! instruction it works on this cycle. Cursors start staggered by one cycle
//! (Fetch leads Write-back by four) and advance together, except that a
//! stage hosting a bubble holds its cursor for one cycle.

/// Program-order index processed by each stage in the current cycle.
///
/// Negative values mean the stage has not received an instruction yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCursors {
    /// Fetch cursor.
    pub fetch: i64,
    /// Decode cursor.
    pub decode: i64,
    /// Execute cursor.
    pub execute: i64,
    /// Memory-access cursor.
    pub memory: i64,
    /// Write-back cursor.
    pub write_back: i64,
}

impl Default for StageCursors {
    fn default() -> Self {
        Self {
            fetch: 0,
            decode: -1,
            execute: -2,
            memory: -3,
            write_back: -4,
        }
    }
}

impl StageCursors {
    /// Returns the index if `cursor` names an instruction of a program with
    /// `len` instructions.
    pub fn in_bounds(cursor: i64, len: usize) -> Option<usize> {
        usize::try_from(cursor).ok().filter(|&idx| idx < len)
    }

    /// Advances every cursor by one, except those of stages that hosted a
    /// bubble this cycle.
    pub fn advance(&mut self, bubbles: Bubbles) {
        self.fetch += 1;
        self.decode += 1;
        if !bubbles.execute {
            self.execute += 1;
        }
        if !bubbles.memory {
            self.memory += 1;
        }
        if !bubbles.write_back {
            self.write_back += 1;
        }
    }
}

/// Stages idled by a load-use bubble in a given cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bubbles {
    /// Execute is idle.
    pub execute: bool,
    /// Memory-access is idle.
    pub memory: bool,
    /// Write-back is idle.
    pub write_back: bool,
}

impl Bubbles {
    /// Bubbles for the next cycle: each one moves a stage downstream.
    pub fn shift(self) -> Self {
        Self {
            execute: false,
            memory: self.execute,
            write_back: self.memory,
        }
    }
}

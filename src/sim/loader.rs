//! Trace-file loader.
//!
//! A trace is a text file holding one assembly instruction per line. Blank
//! lines and lines holding only a `#` comment are skipped; every other line
//! is encoded and appended to the [`Program`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::isa::encoder::{self, EncodeError};
use crate::sim::program::Program;

/// Errors raised while loading a trace.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The trace file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line failed to encode.
    #[error("line {line}: {source}")]
    Encode {
        /// 1-based source line number.
        line: usize,
        /// Encoder error.
        source: EncodeError,
    },
}

/// Assembles trace source text into a program.
///
/// # Errors
///
/// Returns [`LoadError::Encode`] for the first line that fails to encode.
pub fn assemble(source: &str) -> Result<Program, LoadError> {
    let mut program = Program::new();
    for (n, line) in source.lines().enumerate() {
        if encoder::strip_comment(line).trim().is_empty() {
            continue;
        }
        let word = encoder::encode_line(line).map_err(|source| LoadError::Encode {
            line: n + 1,
            source,
        })?;
        program.push(word);
    }
    Ok(program)
}

/// Reads and assembles a trace file.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    assemble(&source)
}

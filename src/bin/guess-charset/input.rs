//! Input acquisition for the `guess-charset` command.
//!
//! Files are memory-mapped by default, or read whole with `--read`. Standard
//! input is always read into memory.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

/// How to bring a named file into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Map the file read-only.
    Mmap,
    /// Read the whole file into a buffer.
    Read,
}

/// A contiguous, read-only view of the input bytes.
pub enum Input {
    /// Memory-mapped file contents.
    Mapped(Mmap),
    /// Bytes copied into memory (stdin, `--read`, or an empty file).
    Buffered(Vec<u8>),
}

impl Input {
    /// Open the file at `path`, or standard input when `path` is `-`.
    pub fn open(path: &Path, strategy: Strategy) -> Result<Self> {
        if path == Path::new("-") {
            return Self::from_stdin();
        }
        match strategy {
            Strategy::Mmap => Self::map_file(path),
            Strategy::Read => Self::read_file(path),
        }
    }

    /// Read all of standard input.
    pub fn from_stdin() -> Result<Self> {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("could not read standard input")?;
        Ok(Self::Buffered(buf))
    }

    fn map_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("could not open file {} for input", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("could not stat file {} for input", path.display()))?
            .len();

        // Zero-length mappings are rejected by mmap(2)
        if len == 0 {
            return Ok(Self::Buffered(Vec::new()));
        }

        // SAFETY: the map is read-only and private to this process. Another
        // process truncating the file while it is mapped can fault the read;
        // the classifier never writes through the mapping.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("could not mmap file {} for input", path.display()))?;
        Ok(Self::Mapped(mmap))
    }

    fn read_file(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .with_context(|| format!("could not open file {} for input", path.display()))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .with_context(|| format!("could not read file {} for input", path.display()))?;
        Ok(Self::Buffered(buf))
    }

    /// Short description of where the bytes live, for `--verbose`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mapped(_) => "mapped",
            Self::Buffered(_) => "read",
        }
    }
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Buffered(buf) => &buf[..],
        }
    }
}

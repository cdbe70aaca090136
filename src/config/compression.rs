//! Compression techniques available to backup targets
//!
//! The set of techniques is closed. Adding one means extending [`Compressor`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::loader::ConfigError;

/// Known compression programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compressor {
    Gzip,
    Bzip2,
    Zip,
}

struct CompressorInfo {
    command: &'static str,
    pipeable: bool,
    suffix: &'static str,
    mime: &'static str,
}

const GZIP: CompressorInfo = CompressorInfo {
    command: "gzip",
    pipeable: true,
    suffix: "gz",
    mime: "application/x-gzip",
};

const BZIP2: CompressorInfo = CompressorInfo {
    command: "bzip2",
    pipeable: true,
    suffix: "bz2",
    mime: "application/x-bzip2",
};

const ZIP: CompressorInfo = CompressorInfo {
    command: "zip",
    pipeable: false,
    suffix: "zip",
    mime: "application/zip",
};

impl Compressor {
    pub const ALL: [Compressor; 3] = [Compressor::Gzip, Compressor::Bzip2, Compressor::Zip];

    fn info(self) -> &'static CompressorInfo {
        match self {
            Compressor::Gzip => &GZIP,
            Compressor::Bzip2 => &BZIP2,
            Compressor::Zip => &ZIP,
        }
    }

    /// Name of the command line program
    pub fn command(self) -> &'static str {
        self.info().command
    }

    /// File suffix without the leading dot
    pub fn suffix(self) -> &'static str {
        self.info().suffix
    }

    pub fn mime_type(self) -> &'static str {
        self.info().mime
    }

    /// Whether the program can compress a stream on stdin.
    ///
    /// zip needs a complete file to archive, so its callers have to dump to a
    /// temporary file first.
    pub fn is_pipeable(self) -> bool {
        self.info().pipeable
    }
}

impl FromStr for Compressor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compressor::ALL
            .into_iter()
            .find(|c| c.command() == s)
            .ok_or_else(|| ConfigError::UnsupportedCompressor(s.to_string()))
    }
}

impl fmt::Display for Compressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Compression settings of a single backup target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compression {
    compressor: Compressor,
    path: Option<PathBuf>,
}

impl Compression {
    pub fn new(compressor: Compressor, path: Option<PathBuf>) -> Self {
        Self { compressor, path }
    }

    /// Create from a compressor name or a path to the compressor binary
    ///
    /// `"gzip"` uses the binary found in `PATH`, `"/usr/local/bin/bzip2"`
    /// pins the directory the binary lives in.
    pub fn create(name: &str) -> Result<Self, ConfigError> {
        let as_path = Path::new(name);
        let (command, path) = match as_path.file_name().and_then(|f| f.to_str()) {
            Some(file_name) if file_name != name => {
                // "gzip/" has an empty parent, which means the current directory
                let dir = match as_path.parent() {
                    Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
                    Some(parent) => parent.to_path_buf(),
                    None => PathBuf::from("."),
                };
                (file_name, Some(dir))
            }
            _ => (name, None),
        };

        let compressor = command.parse::<Compressor>()?;
        Ok(Self::new(compressor, path))
    }

    pub fn compressor(&self) -> Compressor {
        self.compressor
    }

    pub fn command(&self) -> &'static str {
        self.compressor.command()
    }

    /// Directory containing the compressor binary, if one was given
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn suffix(&self) -> &'static str {
        self.compressor.suffix()
    }

    pub fn mime_type(&self) -> &'static str {
        self.compressor.mime_type()
    }

    pub fn is_pipeable(&self) -> bool {
        self.compressor.is_pipeable()
    }

    /// Program to invoke, including the configured directory
    pub fn binary(&self) -> PathBuf {
        match &self.path {
            Some(dir) => dir.join(self.command()),
            None => PathBuf::from(self.command()),
        }
    }
}

//! Source-location value types.

use std::path::PathBuf;

/// A single point in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePoint {
    pub line: u32,
    pub column: u32,
}

/// A location a declaration was seen at: either its first declaration or
/// its definition. Multiple `Location`s can accumulate on one [`crate::domain::info::Info`]
/// across translation units; [`crate::domain::info::Core::def_loc`] tracks the
/// single definitive definition separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: PathBuf,
    pub start: SourcePoint,
    pub end: SourcePoint,
    /// True if this file is outside the set of files the caller asked to
    /// document (reached only as a dependency).
    pub is_file_in_scope: bool,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, start: SourcePoint, end: SourcePoint) -> Self {
        Location {
            file: file.into(),
            start,
            end,
            is_file_in_scope: true,
        }
    }

    pub fn out_of_scope(mut self) -> Self {
        self.is_file_in_scope = false;
        self
    }
}

//! The extraction-mode lattice.
//!
//! Every symbol is extracted under one of four modes. When a symbol is
//! reached by more than one path during traversal (e.g. once as a direct
//! declaration and once as a dependency of another symbol's signature),
//! its final mode is the least-specific mode across all contributing
//! declarations — see [`ExtractionMode::join`].

/// How thoroughly a symbol's documentation should be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtractionMode {
    /// Fully documented: the symbol was reached directly and is in scope.
    Regular,
    /// Emit a stub pointing elsewhere; used for symbols whose full
    /// documentation lives in a different, already-documented entity.
    SeeBelow,
    /// Emit only that the symbol exists; its behavior is implementation
    /// defined and not worth elaborating (e.g. a private base-class detail).
    ImplementationDefined,
    /// The symbol is visible only because something in scope depends on
    /// it (a parameter type, a base class); emit the minimum needed to
    /// make the dependent symbol's documentation well-formed.
    Dependency,
}

impl ExtractionMode {
    /// Ordinal used for the lattice ordering: lower is more specific
    /// (more documentation emitted).
    fn rank(self) -> u8 {
        match self {
            ExtractionMode::Regular => 0,
            ExtractionMode::SeeBelow => 1,
            ExtractionMode::ImplementationDefined => 2,
            ExtractionMode::Dependency => 3,
        }
    }

    /// The least-specific (lattice join) of two modes: whichever one
    /// would emit less documentation wins. Used when the same symbol is
    /// contributed by more than one declaration or traversal path.
    pub fn join(self, other: ExtractionMode) -> ExtractionMode {
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }

    pub fn is_regular(self) -> bool {
        matches!(self, ExtractionMode::Regular)
    }
}

impl Default for ExtractionMode {
    fn default() -> Self {
        ExtractionMode::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_picks_least_specific() {
        assert_eq!(
            ExtractionMode::Regular.join(ExtractionMode::Dependency),
            ExtractionMode::Dependency
        );
        assert_eq!(
            ExtractionMode::SeeBelow.join(ExtractionMode::ImplementationDefined),
            ExtractionMode::ImplementationDefined
        );
    }

    #[test]
    fn join_is_commutative_and_idempotent() {
        for a in [
            ExtractionMode::Regular,
            ExtractionMode::SeeBelow,
            ExtractionMode::ImplementationDefined,
            ExtractionMode::Dependency,
        ] {
            assert_eq!(a.join(a), a);
            for b in [
                ExtractionMode::Regular,
                ExtractionMode::SeeBelow,
                ExtractionMode::ImplementationDefined,
                ExtractionMode::Dependency,
            ] {
                assert_eq!(a.join(b), b.join(a));
            }
        }
    }

    #[test]
    fn regular_is_most_specific() {
        assert_eq!(
            ExtractionMode::Regular.join(ExtractionMode::SeeBelow),
            ExtractionMode::SeeBelow
        );
    }
}

//! Error kinds for the extraction pipeline, grounded on the `thiserror`
//! convention used throughout the example pack's sibling crates
//! (`ai-llm-service`, `rag-store`, `contextor`, `mr-reviewer`,
//! `git-context-engine`): a library-level `thiserror` enum, with `anyhow`
//! reserved for the outer CLI/app boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("input error: {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// A single translation unit failed to parse or produced frontend
    /// diagnostics severe enough to skip it. Non-fatal: collected and
    /// reported alongside a successful run rather than aborting it.
    #[error("translation unit failed: {file}: {cause}")]
    FrontendTu { file: PathBuf, cause: String },

    /// A non-fatal condition worth surfacing to the caller (duplicate doc
    /// comment discarded, unknown config key, etc.) — never returned from
    /// a `Result`, only collected into a `Vec<CoreError>` of warnings.
    #[error("{0}")]
    Warning(String),

    /// An invariant the extractor itself should maintain was violated —
    /// a bug, not a user-facing condition. The CLI treats this as a hard
    /// abort (exit code 2).
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CoreError::FrontendTu { .. } | CoreError::Warning(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_tu_and_warning_are_non_fatal() {
        assert!(!CoreError::FrontendTu {
            file: "a.cpp".into(),
            cause: "parse error".into(),
        }
        .is_fatal());
        assert!(!CoreError::Warning("discarded duplicate doc".into()).is_fatal());
    }

    #[test]
    fn internal_and_config_are_fatal() {
        assert!(CoreError::Internal("kind mismatch".into()).is_fatal());
        assert!(CoreError::Config("bad yaml".into()).is_fatal());
    }
}

//! Error kinds reported by the tree renderer

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while rendering a tree.
///
/// `RootNotFound` and `RootNotReadable` abort a run. `InvalidDepth` and
/// `OutputWriteFailed` are returned as notices next to a rendered tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such directory", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("cannot read '{}': {source}", .path.display())]
    RootNotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid depth '{value}': expected a positive integer, using unlimited depth")]
    InvalidDepth { value: String },

    #[error("cannot write output to '{}': {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Notices accompany a successful render instead of replacing it.
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            TreeError::InvalidDepth { .. } | TreeError::OutputWriteFailed { .. }
        )
    }
}

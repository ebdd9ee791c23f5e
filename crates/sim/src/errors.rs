use std::path::PathBuf;
use thiserror::Error;

/// Error returned when an index is outside the valid range for a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} out of bounds (len = {len})")]
pub struct OutOfBounds {
    /// The index that was requested
    pub index: usize,

    /// The current length of the sequence (upper bound)
    pub len: usize,
}

/// Fatal problems with the reference input. Nothing is mutated when one of
/// these is returned.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("File {} has insufficient content", .path.display())]
    Empty { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Non-fatal conditions raised while editing.
///
/// These never abort a run: the operation degrades to a reduced effect or a
/// no-op, and the warning is kept on the editor for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditWarning {
    /// Fewer bases were deletable than requested; the deletion was clamped.
    #[error("Only {available} chars could be deleted, requested {requested}")]
    Capacity { requested: usize, available: usize },

    /// Nothing was deletable; no operation was performed.
    #[error("No chars could be deleted, requested {requested}")]
    NoCapacity { requested: usize },
}

/// Errors raised while exporting a report or the mutated sequence.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Top-level error for the end-to-end helpers in [`crate::simulation`].
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_from_io_not_found() {
        let err = InputError::from_io(
            "missing.fasta",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, InputError::NotFound { .. }));
        assert_eq!(err.to_string(), "File missing.fasta not found");
    }

    #[test]
    fn test_edit_warning_display() {
        let w = EditWarning::Capacity {
            requested: 8,
            available: 5,
        };
        assert_eq!(w.to_string(), "Only 5 chars could be deleted, requested 8");
    }
}

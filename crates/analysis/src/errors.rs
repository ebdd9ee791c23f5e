use thiserror::Error;

/// Errors raised while reading call sets or writing a comparison.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CompareError::Parse {
            line: 3,
            message: "bad POS".into(),
        };
        assert_eq!(err.to_string(), "Parse error on line 3: bad POS");
    }
}

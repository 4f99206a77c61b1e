use thiserror::Error;

/// Result type alias using ObjexError
pub type Result<T> = std::result::Result<T, ObjexError>;

/// Error taxonomy for the conversion core
///
/// Per-attribute and per-object problems are recovered in-band (sentinels,
/// marker maps, diagnostics) and never surface here; only structurally
/// broken input to the tabular path is a hard failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjexError {
    /// A value handed to the flattener was not a map record
    #[error("record at index {index} is not a map; tabular flattening requires map records")]
    NotARecord { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_index() {
        let err = ObjexError::NotARecord { index: 3 };
        assert!(err.to_string().contains("index 3"));
    }
}

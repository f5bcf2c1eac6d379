//! Error types for dxf-scene

use std::io;
use thiserror::Error;

/// Main error type for dxf-scene operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input contained no group pairs at all
    #[error("Empty DXF input")]
    EmptyFile,

    /// Input ran out mid-stream without an `0/EOF` terminator
    #[error("Unterminated DXF input at line {line}: {reason}")]
    UnterminatedInput { line: usize, reason: String },

    /// The scanner was advanced after the `0/EOF` group was consumed
    #[error("Scanner advanced past EOF marker")]
    ScannerPastEof,

    /// A group code line could not be parsed as an integer
    #[error("Invalid group code at line {line}: '{text}'")]
    InvalidGroupCode { line: usize, text: String },

    /// A coordinate pair was out of sequence (y/z code did not follow x)
    #[error("Malformed point: expected group code {expected}, found {found}")]
    MalformedPoint { expected: i32, found: i32 },

    /// A block reference chain loops back on itself
    #[error("Cyclic block reference involving block '{0}'")]
    CyclicBlockReference(String),

    /// Block expansion exceeded the recursion limit
    #[error("Block nesting deeper than {0} levels")]
    BlockNestingTooDeep(usize),

    /// Error parsing DXF content
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for dxf-scene operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Parse(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Parse(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::MalformedPoint {
            expected: 20,
            found: 11,
        };
        assert_eq!(
            err.to_string(),
            "Malformed point: expected group code 20, found 11"
        );
    }

    #[test]
    fn test_cyclic_block_error() {
        let err = DxfError::CyclicBlockReference("B1".to_string());
        assert!(err.to_string().contains("B1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}

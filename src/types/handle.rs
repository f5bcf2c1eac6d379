//! Handle type for DXF objects
//!
//! Handles uniquely identify objects within a document. Files in the wild
//! frequently omit them, so the parser synthesizes sequential handles for
//! entities that lack one.

use std::fmt;

/// A unique identifier for a DXF object.
///
/// Either the hex string read from a code 5 group, or a sequential value
/// synthesized by the parser when the file supplied none. Synthetic
/// handles are allocated from a counter that is bumped past every parsed
/// handle's numeric value, so the two variants never collide within one
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Handle read from the file (hexadecimal string, kept verbatim)
    Parsed(String),
    /// Handle synthesized by the parser for an entity without one
    Synthetic(u64),
}

impl Handle {
    /// Numeric value of the handle, if it parses as hexadecimal.
    ///
    /// `Parsed` handles that are not valid hex (seen in malformed files)
    /// yield `None`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Handle::Parsed(s) => u64::from_str_radix(s, 16).ok(),
            Handle::Synthetic(v) => Some(*v),
        }
    }

    /// Whether this handle was synthesized rather than read from the file
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Handle::Synthetic(_))
    }
}

impl From<&str> for Handle {
    fn from(s: &str) -> Self {
        Handle::Parsed(s.to_string())
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::Parsed(s) => write!(f, "{}", s),
            Handle::Synthetic(v) => write!(f, "{:X}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_handle_value() {
        let h = Handle::Parsed("1F".to_string());
        assert_eq!(h.as_u64(), Some(0x1F));
        assert!(!h.is_synthetic());
    }

    #[test]
    fn test_synthetic_handle() {
        let h = Handle::Synthetic(42);
        assert_eq!(h.as_u64(), Some(42));
        assert!(h.is_synthetic());
    }

    #[test]
    fn test_non_hex_handle() {
        let h = Handle::Parsed("XYZZY".to_string());
        assert_eq!(h.as_u64(), None);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(Handle::Parsed("ABCD".to_string()).to_string(), "ABCD");
        assert_eq!(Handle::Synthetic(255).to_string(), "FF");
    }
}

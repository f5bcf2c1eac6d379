//! LTYPE table entry

/// A line type record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineType {
    /// Line type name (code 2)
    pub name: String,
    /// Descriptive text (code 3)
    pub description: String,
    /// Total pattern length (code 40)
    pub pattern_length: f64,
    /// Dash/dot/space lengths (code 49, repeated)
    pub elements: Vec<f64>,
}

impl LineType {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An offset that does not fit the 16x16 window around the origin.
    OffsetOutOfRange(i16),
    Parse(String),
}

/// Error type for osbng-rs operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BngError {
    /// The BNG reference string is malformed (bad letters, odd digit
    /// grouping, invalid quadrant suffix, or too many digits).
    Reference(String),
    /// Easting/northing coordinates, or a derived offset, fall outside
    /// the BNG index system extent.
    Index(String),
    /// The requested resolution label or metre value is not supported.
    UnknownResolution(String),
    /// A parent/child was requested at a resolution that is not strictly
    /// coarser/finer than the input reference's resolution.
    Hierarchy(String),
    /// A neighbour test was attempted between references at different
    /// resolutions.
    Neighbour(String),
}

impl std::fmt::Display for BngError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BngError::Reference(msg) => write!(f, "Invalid BNG reference: {}", msg),
            BngError::Index(msg) => write!(f, "Outside BNG extent: {}", msg),
            BngError::UnknownResolution(msg) => write!(f, "Unknown BNG resolution: {}", msg),
            BngError::Hierarchy(msg) => write!(f, "BNG hierarchy error: {}", msg),
            BngError::Neighbour(msg) => write!(f, "BNG neighbour error: {}", msg),
        }
    }
}

impl std::error::Error for BngError {}

use std::fmt;

/// Errors raised when an [`OverlayArea`](crate::OverlayArea) cannot be built
/// over the given base geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAreaError {
    /// The base geometry is not a single polygon.
    UnsupportedGeometry(String),
    /// The base polygon has interior rings; only hole-free polygons can be
    /// indexed as a base operand.
    HolesNotSupported { holes: usize },
    /// The base polygon has no exterior coordinates.
    EmptyGeometry,
    /// A ring is not closed or has fewer than four coordinates.
    InvalidRing(String),
}

impl fmt::Display for OverlayAreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedGeometry(kind) => {
                write!(f, "unsupported base geometry: expected a Polygon, got {kind}")
            }
            Self::HolesNotSupported { holes } => {
                write!(f, "base polygon has {holes} interior ring(s); only polygons without holes are supported")
            }
            Self::EmptyGeometry => write!(f, "base polygon is empty"),
            Self::InvalidRing(reason) => write!(f, "invalid ring: {reason}"),
        }
    }
}

impl std::error::Error for OverlayAreaError {}

pub type Result<T, E = OverlayAreaError> = std::result::Result<T, E>;

// error_handling.rs - Error taxonomy for the grid-to-graph pipeline

use thiserror::Error;

use crate::coord::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A single cell's background format could not be retrieved. The
    /// scanner absorbs this per cell (skip and continue); it never
    /// escapes a scan.
    #[error("cell format unavailable at row {row}, col {col}")]
    CellFormatUnavailable { row: u32, col: u32 },

    /// Zero or more than one start/end marker on the grid. Carries
    /// everything that was found so the caller can report precisely or
    /// persist the partial result.
    #[error(
        "expected exactly one start and one end marker, found {} start(s) and {} end(s)",
        starts.len(),
        ends.len()
    )]
    MultipleOrMissingMarker { starts: Vec<Coord>, ends: Vec<Coord> },

    /// One-sided adjacency discovered at validation time. Indicates the
    /// vertex computation itself is inconsistent; always fatal.
    #[error("asymmetric adjacency: {vertex} lists {neighbor} but not the reverse")]
    InternalAsymmetry { vertex: Coord, neighbor: Coord },

    /// Text that does not render a coordinate.
    #[error("malformed coordinate {text:?}")]
    CoordParse { text: String },

    /// A paint assignment the sink could not apply.
    #[error("failed to paint cell {coord}: {reason}")]
    PaintRejected { coord: Coord, reason: String },
}

pub type Result<T> = std::result::Result<T, MazeError>;

// scanner.rs - Rectangular sheet scan producing a role map

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::color::{classify, CellRole, Color};
use crate::coord::Coord;
use crate::error_handling::Result;

/// Sheet dimensions as reported by the dimension collaborator
/// (derived upstream from a bulk cell-value fetch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Supplies per-cell background colors. References are 1-based
/// (row, column), matching the sheet service addressing; the scanner
/// normalizes to zero-based coordinates.
pub trait ColorSource {
    fn color_at(&self, row: u32, col: u32) -> Result<Color>;
}

/// Role per scanned coordinate. Cells whose color could not be retrieved
/// are absent.
pub type RoleMap = BTreeMap<Coord, CellRole>;

/// Scan the full rectangle row-major, classifying every cell.
///
/// Per-cell failures are absorbed here: a cell whose format cannot be
/// produced is logged and skipped, and the scan continues. One bad cell
/// must not void an otherwise valid grid. An empty rectangle yields an
/// empty map, not an error.
pub fn scan<S: ColorSource>(size: GridSize, source: &S) -> RoleMap {
    let mut roles = RoleMap::new();
    for row in 1..=size.rows {
        for col in 1..=size.cols {
            match source.color_at(row, col) {
                Ok(color) => {
                    roles.insert(Coord::new(col - 1, row - 1), classify(color));
                }
                Err(err) => {
                    log::debug!("skipping cell at row {}, col {}: {}", row, col, err);
                }
            }
        }
    }
    if roles.len() as u64 != size.cell_count() {
        log::warn!(
            "scan covered {} of {} cells",
            roles.len(),
            size.cell_count()
        );
    }
    roles
}

/// `scan` with the cell loop fanned out over rayon, for sources that can
/// serve concurrent lookups (e.g. an in-memory snapshot). Retrieval order
/// has no effect on the result, so both variants produce identical maps.
pub fn scan_parallel<S: ColorSource + Sync>(size: GridSize, source: &S) -> RoleMap {
    (1..=size.rows)
        .into_par_iter()
        .flat_map(|row| (1..=size.cols).into_par_iter().map(move |col| (row, col)))
        .filter_map(|(row, col)| match source.color_at(row, col) {
            Ok(color) => Some((Coord::new(col - 1, row - 1), classify(color))),
            Err(err) => {
                log::debug!("skipping cell at row {}, col {}: {}", row, col, err);
                None
            }
        })
        .collect()
}

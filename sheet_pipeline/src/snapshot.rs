// snapshot.rs - JSON sheet snapshot standing in for the remote service

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use maze_core::{CellPaint, Color, ColorSource, GridSize, MazeError, PaintSink};

/// A captured sheet: per-cell background colors in row-major order.
///
/// `null` cells are ones whose format the capture could not read; the
/// scanner skips them, exactly as the live service's per-cell format
/// errors are skipped. Dimensions derive from the array shape, the same
/// way the live glue sizes the grid from a bulk value fetch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SheetSnapshot {
    #[serde(default)]
    pub sheet_name: String,
    pub cells: Vec<Vec<Option<Color>>>,
}

impl SheetSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot open sheet snapshot {}", path.display()))?;
        let snapshot = serde_json::from_str(&text)
            .with_context(|| format!("malformed sheet snapshot {}", path.display()))?;
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("cannot write sheet snapshot {}", path.display()))
    }

    pub fn size(&self) -> GridSize {
        let rows = self.cells.len() as u32;
        let cols = self.cells.first().map_or(0, |row| row.len()) as u32;
        GridSize::new(rows, cols)
    }
}

impl ColorSource for SheetSnapshot {
    /// 1-based (row, col) addressing per the source contract.
    fn color_at(&self, row: u32, col: u32) -> maze_core::Result<Color> {
        (row as usize)
            .checked_sub(1)
            .and_then(|r| self.cells.get(r))
            .and_then(|cells| (col as usize).checked_sub(1).and_then(|c| cells.get(c)))
            .copied()
            .flatten()
            .ok_or(MazeError::CellFormatUnavailable { row, col })
    }
}

impl PaintSink for SheetSnapshot {
    /// Paint coordinates are zero-based (col, row), like graph keys.
    fn apply(&mut self, paint: CellPaint) -> maze_core::Result<()> {
        let row = paint.coord.row as usize;
        let col = paint.coord.col as usize;
        match self.cells.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(cell) => {
                *cell = Some(paint.color);
                Ok(())
            }
            None => Err(MazeError::PaintRejected {
                coord: paint.coord,
                reason: "outside the captured grid".to_string(),
            }),
        }
    }
}

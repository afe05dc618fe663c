// sink.rs - Paced application of paint assignments

use std::thread;
use std::time::Duration;

use maze_core::{CellPaint, PaintSink};

/// Wraps a sink with a fixed delay after every write, the way the sheet
/// glue throttles itself to stay inside service quotas. Pacing policy
/// lives here, outside the renderer.
pub struct PacedSink<S> {
    inner: S,
    delay: Duration,
}

impl<S: PaintSink> PacedSink<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PaintSink> PaintSink for PacedSink<S> {
    fn apply(&mut self, paint: CellPaint) -> maze_core::Result<()> {
        self.inner.apply(paint)?;
        log::info!("painted cell {}", paint.coord);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

/// Apply a full assignment list in order, stopping at the first failure.
pub fn apply_all<S: PaintSink>(sink: &mut S, paints: &[CellPaint]) -> maze_core::Result<()> {
    for &paint in paints {
        sink.apply(paint)?;
    }
    Ok(())
}

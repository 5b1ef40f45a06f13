//! # Chart renderer
//!
//! Turns a label → count table into a PNG image: a bar chart (one bar per label, in order) or a pie chart
//! (one slice per label, percentage labels). Images are rendered into memory; [`write_chart`] persists one
//! when a file is wanted.
//!
//! Rendering is CPU-bound and synchronous; async callers should run it on a blocking thread.

use std::fs;
use std::path::Path;
use thiserror::Error;

mod chart;
mod styles;

pub use chart::{PlottersRenderer, MIN_CANVAS_SIDE};
pub use styles::{ChartStyle, ChartTheme, PALETTE};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No data to plot")]
    EmptyData,

    #[error("Canvas {width}x{height} is too small to draw on")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Renders count tables to PNG bytes. Implementations are stateless and safe to share across threads.
pub trait ChartRenderer: Send + Sync {
    /// Bar chart: labels on the category axis (in the given order), counts on the value axis.
    fn bar_chart(&self, title: &str, data: &[(String, u64)]) -> Result<Vec<u8>>;

    /// Pie chart: one slice per label sized by its share of the total.
    fn pie_chart(&self, title: &str, data: &[(String, u64)]) -> Result<Vec<u8>>;
}

/// Writes rendered image bytes to `path`, creating parent directories.
pub fn write_chart(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Chart written");
    Ok(())
}

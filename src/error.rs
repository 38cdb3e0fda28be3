use thiserror::Error;

/// Caller contract violations, detected before any depth cell is written.
///
/// Draws the emulated GPU would not rasterize are not errors; they come back
/// as `DrawOutcome::Skipped`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("depth slice holds {len} cells, {width}x{height} at stride {stride} needs {needed}")]
    TargetTooSmall {
        len: usize,
        width: usize,
        height: usize,
        stride: usize,
        needed: usize,
    },

    #[error("target width {width} exceeds stride {stride}")]
    WidthExceedsStride { width: usize, stride: usize },

    #[error("draw of {requested} vertices exceeds scratch capacity {capacity}")]
    ScratchTooSmall { requested: usize, capacity: usize },

    #[error("vertex data holds {available} bytes, draw needs {needed}")]
    VertexDataTruncated { needed: usize, available: usize },
}

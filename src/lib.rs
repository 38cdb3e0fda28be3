pub mod perf;
/// Depth Raster - software depth-only rasterizer for GPU emulation
/// Fills a 16-bit depth buffer ahead of the hardware renderer so occlusion
/// can be queried without reading back GPU depth
pub mod assemble;
pub mod config;
pub mod error;
pub mod gpu;
pub mod raster;
pub mod rasterizer;
pub mod simd;

pub use assemble::{DrawCall, DrawOutcome, DrawScratch, DrawStats, SkipReason, MAX_DRAW_VERTICES};
pub use config::{RasterConfig, RectCompare, SimdPreference, TriangleNever};
pub use error::RasterError;
pub use gpu::{
    DecodedLayout, GpuState, PositionFormat, PrimitiveType, VertexDecoder, VertexType, Viewport,
    Winding,
};
pub use perf::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};
pub use raster::{CompareMode, CullMode, DepthBuffer, DepthTarget, ScissorRect, ScreenVert};
pub use rasterizer::{fill_rect, rasterize_primitive, rasterize_triangle, DepthRasterizer};
pub use simd::{SimdMode, Vec4F32, Vec4S32};

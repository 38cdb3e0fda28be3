/// Depth pre-pass entry points
///
/// `DepthRasterizer` fixes the configuration and the SIMD mode once; the free
/// functions at the bottom share one lazily built default rasterizer for
/// callers that do not keep one around.
use std::sync::OnceLock;

use log::debug;

use crate::assemble::{self, DrawCall, DrawOutcome, DrawScratch};
use crate::config::{RasterConfig, RectCompare, SimdPreference, TriangleNever};
use crate::error::RasterError;
use crate::gpu::{GpuState, VertexDecoder};
use crate::raster::{self, CompareMode, CullMode, DepthTarget, ScissorRect, ScreenVert};
use crate::simd::SimdMode;

pub struct DepthRasterizer {
    pub cull: CullMode,
    pub rect_compare: RectCompare,
    pub triangle_never: TriangleNever,
    simd_mode: SimdMode,
}

impl DepthRasterizer {
    pub fn new() -> Self {
        Self::with_config(RasterConfig::default())
    }

    pub fn with_config(config: RasterConfig) -> Self {
        let simd_mode = match config.simd {
            SimdPreference::Auto => SimdMode::detect(),
            SimdPreference::Scalar => SimdMode::Scalar,
        };
        debug!(
            "depth raster: {:?} mode ({} row kernel), cull {:?}, rect compare {:?}, triangle never {:?}",
            simd_mode,
            simd_mode.kernel().name(),
            config.cull,
            config.rect_compare,
            config.triangle_never
        );

        Self {
            cull: config.cull,
            rect_compare: config.rect_compare,
            triangle_never: config.triangle_never,
            simd_mode,
        }
    }

    #[inline]
    pub fn simd_mode(&self) -> SimdMode {
        self.simd_mode
    }

    pub fn config(&self) -> RasterConfig {
        RasterConfig {
            cull: self.cull,
            rect_compare: self.rect_compare,
            triangle_never: self.triangle_never,
            simd: match self.simd_mode {
                SimdMode::Scalar => SimdPreference::Scalar,
                SimdMode::Sse2 => SimdPreference::Auto,
            },
        }
    }

    /// Fill a rectangle clipped only to the target extent. Returns cells written.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_rect(
        &self,
        target: &mut DepthTarget<'_>,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        depth: u16,
        compare: CompareMode,
    ) -> usize {
        let bounds = target.bounds();
        self.fill_rect_scissored(target, bounds, x1, y1, x2, y2, depth, compare)
    }

    /// Fill a rectangle clipped to `scissor` and the target extent.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_rect_scissored(
        &self,
        target: &mut DepthTarget<'_>,
        scissor: ScissorRect,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        depth: u16,
        compare: CompareMode,
    ) -> usize {
        raster::fill_rect_in(
            self.simd_mode.kernel(),
            target,
            scissor,
            x1,
            y1,
            x2,
            y2,
            depth,
            compare,
            self.rect_compare,
        )
    }

    /// Rasterize one triangle. Returns cells written.
    pub fn rasterize_triangle(
        &self,
        target: &mut DepthTarget<'_>,
        scissor: ScissorRect,
        verts: &[ScreenVert; 3],
        compare: CompareMode,
    ) -> usize {
        raster::rasterize_triangle_in(
            target,
            scissor,
            verts,
            compare,
            self.cull,
            self.triangle_never,
            self.simd_mode,
        )
    }

    /// Assemble and rasterize one GE draw.
    ///
    /// Scratch and vertex data problems are reported before the buffer is
    /// touched; draws the GPU would not depth-write come back as
    /// `DrawOutcome::Skipped`.
    #[allow(clippy::too_many_arguments)]
    pub fn rasterize_primitive(
        &self,
        target: &mut DepthTarget<'_>,
        scissor: ScissorRect,
        scratch: &mut DrawScratch,
        vertex_data: &[u8],
        draw: &DrawCall,
        decoder: &dyn VertexDecoder,
        state: &GpuState,
    ) -> Result<DrawOutcome, RasterError> {
        assemble::rasterize_draw(self, target, scissor, scratch, vertex_data, draw, decoder, state)
    }
}

impl Default for DepthRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Default-configured rasterizer behind the free functions, detected once.
fn shared() -> &'static DepthRasterizer {
    static DEFAULT: OnceLock<DepthRasterizer> = OnceLock::new();
    DEFAULT.get_or_init(DepthRasterizer::new)
}

#[allow(clippy::too_many_arguments)]
pub fn fill_rect(
    target: &mut DepthTarget<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    depth: u16,
    compare: CompareMode,
) -> usize {
    shared().fill_rect(target, x1, y1, x2, y2, depth, compare)
}

pub fn rasterize_triangle(
    target: &mut DepthTarget<'_>,
    scissor: ScissorRect,
    verts: &[ScreenVert; 3],
    compare: CompareMode,
) -> usize {
    shared().rasterize_triangle(target, scissor, verts, compare)
}

#[allow(clippy::too_many_arguments)]
pub fn rasterize_primitive(
    target: &mut DepthTarget<'_>,
    scissor: ScissorRect,
    scratch: &mut DrawScratch,
    vertex_data: &[u8],
    draw: &DrawCall,
    decoder: &dyn VertexDecoder,
    state: &GpuState,
) -> Result<DrawOutcome, RasterError> {
    shared().rasterize_primitive(target, scissor, scratch, vertex_data, draw, decoder, state)
}

/// Primitive assembly: GE draw calls into depth buffer writes
///
/// A draw is gated on register state and vertex format, its positions are
/// read from decoded vertex bytes, transformed (or passed through), then
/// stitched into rectangles or triangles and handed to the filler or the
/// triangle rasterizer in submission order.
pub mod positions;
pub mod scratch;
pub mod stitch;
pub mod transform;

use log::trace;

use crate::error::RasterError;
use crate::gpu::{DepthGate, GpuState, PositionFormat, PrimitiveType, VertexDecoder, VertexType, Winding};
use crate::raster::{CompareMode, DepthTarget, ScissorRect, ScreenVert};
use crate::count_call;
use crate::rasterizer::DepthRasterizer;

pub use scratch::{DrawScratch, MAX_DRAW_VERTICES};

/// One GE draw as the depth pre-pass sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub prim: PrimitiveType,
    pub vertex_count: usize,
    pub vertex_type: VertexType,
    /// Carried for diagnostics; setup winding is fixed.
    pub winding: Winding,
}

impl DrawCall {
    pub fn new(prim: PrimitiveType, vertex_count: usize, vertex_type: VertexType) -> Self {
        Self {
            prim,
            vertex_count,
            vertex_type,
            winding: Winding::default(),
        }
    }
}

/// Why a draw left the buffer untouched without being an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    ClearWithoutDepthWrite,
    DepthTestDisabled,
    DepthWriteDisabled,
    UnsupportedPrimitive(PrimitiveType),
    IndexedVertices,
    SkinnedVertices,
    NoPosition,
    AllBehindCamera,
}

impl From<DepthGate> for SkipReason {
    fn from(gate: DepthGate) -> Self {
        match gate {
            DepthGate::ClearWithoutDepthWrite => SkipReason::ClearWithoutDepthWrite,
            DepthGate::DepthTestDisabled => SkipReason::DepthTestDisabled,
            DepthGate::DepthWriteDisabled => SkipReason::DepthWriteDisabled,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub rects: usize,
    /// Triangles handed to the rasterizer (culled ones included).
    pub triangles: usize,
    /// Triangles dropped for touching a vertex behind the camera.
    pub triangles_behind: usize,
    pub pixels_written: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(DrawStats),
    Skipped(SkipReason),
}

impl DrawOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, DrawOutcome::Skipped(_))
    }

    /// Cells written, zero when skipped.
    pub fn pixels_written(&self) -> usize {
        match self {
            DrawOutcome::Drawn(stats) => stats.pixels_written,
            DrawOutcome::Skipped(_) => 0,
        }
    }
}

fn check_draw(state: &GpuState, draw: &DrawCall) -> Result<CompareMode, SkipReason> {
    let compare = state.effective_compare()?;
    if !draw.prim.is_depth_rasterizable() {
        return Err(SkipReason::UnsupportedPrimitive(draw.prim));
    }
    let vt = &draw.vertex_type;
    if vt.is_indexed() {
        return Err(SkipReason::IndexedVertices);
    }
    if vt.is_skinned() {
        return Err(SkipReason::SkinnedVertices);
    }
    if vt.position == PositionFormat::None {
        return Err(SkipReason::NoPosition);
    }
    Ok(compare)
}

fn skipped(draw: &DrawCall, reason: SkipReason) -> DrawOutcome {
    count_call!(draws_skipped);
    trace!("depth raster: skipping {} draw of {} vertices: {:?}", draw.prim, draw.vertex_count, reason);
    DrawOutcome::Skipped(reason)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn rasterize_draw(
    raster: &DepthRasterizer,
    target: &mut DepthTarget<'_>,
    scissor: ScissorRect,
    scratch: &mut DrawScratch,
    vertex_data: &[u8],
    draw: &DrawCall,
    decoder: &dyn VertexDecoder,
    state: &GpuState,
) -> Result<DrawOutcome, RasterError> {
    count_call!(draw_calls);

    let compare = match check_draw(state, draw) {
        Ok(compare) => compare,
        Err(reason) => return Ok(skipped(draw, reason)),
    };

    let count = draw.vertex_count;
    let vt = draw.vertex_type;
    let (model, screen) = scratch.split_mut(count)?;
    positions::read_positions(
        vertex_data,
        vt.position,
        decoder.vertex_size(),
        decoder.position_offset(),
        vt.through,
        model,
    )?;

    if vt.through {
        transform::passthrough_vertices(model, screen);
    } else if !transform::project_vertices(state, model, screen) {
        return Ok(skipped(draw, SkipReason::AllBehindCamera));
    }

    trace!(
        "depth raster: {} draw, {} vertices, {:?} compare, {:?} winding",
        draw.prim,
        count,
        compare,
        draw.winding
    );

    let screen: &[ScreenVert] = screen;
    let mut stats = DrawStats::default();

    match draw.prim {
        PrimitiveType::Rectangles => {
            for [i0, i1] in stitch::rect_pairs(count) {
                let (a, b) = (screen[i0], screen[i1]);
                stats.rects += 1;
                // Depth comes from the second corner.
                stats.pixels_written += raster.fill_rect_scissored(target, scissor, a.x, a.y, b.x, b.y, b.z, compare);
            }
        }
        PrimitiveType::Triangles => {
            draw_triangles(raster, target, scissor, screen, stitch::triangle_list(count), compare, &mut stats);
        }
        PrimitiveType::TriangleStrip => {
            draw_triangles(raster, target, scissor, screen, stitch::triangle_strip(count), compare, &mut stats);
        }
        PrimitiveType::TriangleFan => {
            draw_triangles(raster, target, scissor, screen, stitch::triangle_fan(count), compare, &mut stats);
        }
        // Rejected by check_draw.
        _ => {}
    }

    Ok(DrawOutcome::Drawn(stats))
}

fn draw_triangles(
    raster: &DepthRasterizer,
    target: &mut DepthTarget<'_>,
    scissor: ScissorRect,
    screen: &[ScreenVert],
    triangles: impl Iterator<Item = [usize; 3]>,
    compare: CompareMode,
    stats: &mut DrawStats,
) {
    for [i0, i1, i2] in triangles {
        let tri = [screen[i0], screen[i1], screen[i2]];
        if tri.iter().any(|v| v.behind) {
            count_call!(triangles_behind);
            stats.triangles_behind += 1;
            continue;
        }
        stats.triangles += 1;
        stats.pixels_written += raster.rasterize_triangle(target, scissor, &tri, compare);
    }
}

/// Depth-only triangle rasterization with integer edge functions
///
/// Vertices are integer screen positions. The bounding box is walked row by
/// row, stepping the three edge values by `B` per row and `A` per column, and
/// a pixel is inside when all three are non-negative (edges are inclusive).
/// Depth is interpolated from pre-scaled vertex depths and truncated to `u16`
/// on store.
///
/// The wide walker evaluates four columns per step with `Vec4S32`/`Vec4F32`
/// and computes the exact same float expression per lane, so both walkers
/// produce identical buffers.
use crate::config::TriangleNever;
use crate::count_call;
use crate::raster::compare::CompareMode;
use crate::raster::target::{DepthTarget, ScissorRect};
use crate::simd::{SimdMode, Vec4F32, Vec4S32};

/// Screen-space vertex as produced by the transform stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScreenVert {
    pub x: i32,
    pub y: i32,
    pub z: u16,
    /// `w <= 0` (or NaN) after projection.
    pub behind: bool,
}

impl ScreenVert {
    pub const fn new(x: i32, y: i32, z: u16) -> Self {
        Self {
            x,
            y,
            z,
            behind: false,
        }
    }
}

/// Which winding survives triangle setup.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CullMode {
    /// Only positive-area triangles are drawn.
    #[default]
    FrontOnly,
    /// Negative-area triangles are drawn with the opposite winding.
    TwoSided,
}

/// Edge equations `A*x + B*y + C`, one per edge, indexed by the opposite vertex.
#[derive(Copy, Clone, Debug)]
struct EdgeSetup {
    a: [i32; 3],
    b: [i32; 3],
    c: [i32; 3],
    area: i32,
}

impl EdgeSetup {
    #[inline]
    fn new(v: &[ScreenVert; 3]) -> Self {
        let (x0, y0) = (v[0].x, v[0].y);
        let (x1, y1) = (v[1].x, v[1].y);
        let (x2, y2) = (v[2].x, v[2].y);

        let a = [y1.wrapping_sub(y2), y2.wrapping_sub(y0), y0.wrapping_sub(y1)];
        let b = [x2.wrapping_sub(x1), x0.wrapping_sub(x2), x1.wrapping_sub(x0)];
        let c = [
            x1.wrapping_mul(y2).wrapping_sub(x2.wrapping_mul(y1)),
            x2.wrapping_mul(y0).wrapping_sub(x0.wrapping_mul(y2)),
            x0.wrapping_mul(y1).wrapping_sub(x1.wrapping_mul(y0)),
        ];
        let area = a[0]
            .wrapping_mul(x0)
            .wrapping_add(b[0].wrapping_mul(y0))
            .wrapping_add(c[0]);

        Self { a, b, c, area }
    }

    #[inline(always)]
    fn eval(&self, edge: usize, x: i32, y: i32) -> i32 {
        self.a[edge]
            .wrapping_mul(x)
            .wrapping_add(self.b[edge].wrapping_mul(y))
            .wrapping_add(self.c[edge])
    }
}

/// Rasterize one triangle into `target`, restricted to `scissor`.
///
/// Vertices are taken as (v0, v2, v1) before setup; with y pointing down that
/// makes GE front faces come out with positive area. NEVER is resolved by
/// `never` before setup. Returns the number of cells written.
#[allow(clippy::too_many_arguments)]
pub fn rasterize_triangle_in(
    target: &mut DepthTarget<'_>,
    scissor: ScissorRect,
    verts: &[ScreenVert; 3],
    compare: CompareMode,
    cull: CullMode,
    never: TriangleNever,
    mode: SimdMode,
) -> usize {
    count_call!(triangles_submitted);

    let compare = match (compare, never) {
        (CompareMode::Never, TriangleNever::Reject) => return 0,
        (CompareMode::Never, TriangleNever::Pass) => CompareMode::Always,
        (compare, _) => compare,
    };

    let mut tri = [verts[0], verts[2], verts[1]];

    let clip = target.clip(scissor);
    let min_x = tri[0].x.min(tri[1].x).min(tri[2].x);
    let max_x = tri[0].x.max(tri[1].x).max(tri[2].x);
    let min_y = tri[0].y.min(tri[1].y).min(tri[2].y);
    let max_y = tri[0].y.max(tri[1].y).max(tri[2].y);

    let start_x = min_x.max(clip.x1);
    let start_y = min_y.max(clip.y1);
    let end_x = max_x.saturating_add(1).min(clip.x2);
    let end_y = max_y.saturating_add(1).min(clip.y2);
    if start_x >= end_x || start_y >= end_y {
        count_call!(triangles_off_scissor);
        return 0;
    }

    let mut setup = EdgeSetup::new(&tri);
    if setup.area < 0 && cull == CullMode::TwoSided {
        tri.swap(1, 2);
        setup = EdgeSetup::new(&tri);
    }
    if setup.area <= 0 {
        count_call!(triangles_culled);
        return 0;
    }

    let inv_area = 1.0 / setup.area as f32;
    let zz = [
        tri[0].z as f32 * inv_area,
        tri[1].z as f32 * inv_area,
        tri[2].z as f32 * inv_area,
    ];

    let span = SpanBounds {
        x1: start_x,
        y1: start_y,
        x2: end_x,
        y2: end_y,
    };
    if mode.is_wide() {
        walk_lanes(target, &setup, span, zz, compare)
    } else {
        walk_scalar(target, &setup, span, zz, compare)
    }
}

/// Clipped bounding box, all coordinates inside the target.
#[derive(Copy, Clone, Debug)]
struct SpanBounds {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

#[inline(always)]
fn test_and_write(cell: &mut u16, depth: f32, compare: CompareMode) -> bool {
    count_call!(pixels_tested);
    if compare.passes(depth, *cell as f32) {
        count_call!(depth_passed);
        *cell = depth as u16;
        true
    } else {
        count_call!(depth_failed);
        false
    }
}

/// Walk `cells` left to right starting from edge values `w`.
#[inline(always)]
fn walk_cells(
    cells: &mut [u16],
    mut w: [i32; 3],
    a: [i32; 3],
    zz: [f32; 3],
    compare: CompareMode,
) -> usize {
    let mut written = 0;
    for cell in cells {
        if (w[0] | w[1] | w[2]) >= 0 {
            let depth = w[0] as f32 * zz[0] + w[1] as f32 * zz[1] + w[2] as f32 * zz[2];
            if test_and_write(cell, depth, compare) {
                written += 1;
            }
        }
        w[0] = w[0].wrapping_add(a[0]);
        w[1] = w[1].wrapping_add(a[1]);
        w[2] = w[2].wrapping_add(a[2]);
    }
    written
}

fn walk_scalar(
    target: &mut DepthTarget<'_>,
    setup: &EdgeSetup,
    span: SpanBounds,
    zz: [f32; 3],
    compare: CompareMode,
) -> usize {
    let mut row = [
        setup.eval(0, span.x1, span.y1),
        setup.eval(1, span.x1, span.y1),
        setup.eval(2, span.x1, span.y1),
    ];
    let mut written = 0;

    for y in span.y1..span.y2 {
        let cells = target.row_span_mut(y as usize, span.x1 as usize, span.x2 as usize);
        written += walk_cells(cells, row, setup.a, zz, compare);

        row[0] = row[0].wrapping_add(setup.b[0]);
        row[1] = row[1].wrapping_add(setup.b[1]);
        row[2] = row[2].wrapping_add(setup.b[2]);
    }

    written
}

fn walk_lanes(
    target: &mut DepthTarget<'_>,
    setup: &EdgeSetup,
    span: SpanBounds,
    zz: [f32; 3],
    compare: CompareMode,
) -> usize {
    let lane_offsets = Vec4S32::new(0, 1, 2, 3);
    let col_offset = [
        Vec4S32::splat(setup.a[0]) * lane_offsets,
        Vec4S32::splat(setup.a[1]) * lane_offsets,
        Vec4S32::splat(setup.a[2]) * lane_offsets,
    ];
    let step = [
        Vec4S32::splat(setup.a[0].wrapping_mul(4)),
        Vec4S32::splat(setup.a[1].wrapping_mul(4)),
        Vec4S32::splat(setup.a[2].wrapping_mul(4)),
    ];
    let zz_x4 = [
        Vec4F32::splat(zz[0]),
        Vec4F32::splat(zz[1]),
        Vec4F32::splat(zz[2]),
    ];

    let mut row = [
        setup.eval(0, span.x1, span.y1),
        setup.eval(1, span.x1, span.y1),
        setup.eval(2, span.x1, span.y1),
    ];
    let mut written = 0;

    for y in span.y1..span.y2 {
        let mut e0 = Vec4S32::splat(row[0]) + col_offset[0];
        let mut e1 = Vec4S32::splat(row[1]) + col_offset[1];
        let mut e2 = Vec4S32::splat(row[2]) + col_offset[2];

        let cells = target.row_span_mut(y as usize, span.x1 as usize, span.x2 as usize);
        let mut quads = cells.chunks_exact_mut(4);
        for quad in &mut quads {
            let inside = (e0 | e1 | e2).sign_mask() ^ 0xF;
            if inside != 0 {
                let depth = Vec4F32::from_s32(e0) * zz_x4[0]
                    + Vec4F32::from_s32(e1) * zz_x4[1]
                    + Vec4F32::from_s32(e2) * zz_x4[2];
                let depth = depth.to_array();
                for (lane, cell) in quad.iter_mut().enumerate() {
                    if inside & (1 << lane) != 0 && test_and_write(cell, depth[lane], compare) {
                        written += 1;
                    }
                }
            }
            e0 = e0 + step[0];
            e1 = e1 + step[1];
            e2 = e2 + step[2];
        }

        // Up to three columns left over.
        let tail = [e0.lane(0), e1.lane(0), e2.lane(0)];
        written += walk_cells(quads.into_remainder(), tail, setup.a, zz, compare);

        row[0] = row[0].wrapping_add(setup.b[0]);
        row[1] = row[1].wrapping_add(setup.b[1]);
        row[2] = row[2].wrapping_add(setup.b[2]);
    }

    written
}

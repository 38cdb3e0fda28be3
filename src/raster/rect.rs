/// Axis-aligned rectangle fills with a single depth value
///
/// ALWAYS goes through the row kernel (wide stores), NEVER is a no-op, and
/// the remaining comparisons follow the `RectCompare` policy.
use crate::config::RectCompare;
use crate::count_add;
use crate::count_call;
use crate::raster::compare::CompareMode;
use crate::raster::target::{DepthTarget, ScissorRect};
use crate::simd::RowKernel;

/// Fill `[x1, x2) x [y1, y2)` (corners in either order) inside `clip`.
///
/// Returns the number of cells written.
#[allow(clippy::too_many_arguments)]
pub fn fill_rect_in(
    kernel: &dyn RowKernel,
    target: &mut DepthTarget<'_>,
    clip: ScissorRect,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    depth: u16,
    compare: CompareMode,
    policy: RectCompare,
) -> usize {
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
    if x1 == x2 || y1 == y2 {
        return 0;
    }

    let area = ScissorRect::new(x1, y1, x2, y2).intersect(target.clip(clip));
    if area.is_empty() {
        return 0;
    }

    // Non-empty and clipped to the target, so all four are in range.
    let (x1, x2) = (area.x1 as usize, area.x2 as usize);
    let (y1, y2) = (area.y1 as usize, area.y2 as usize);

    match compare {
        CompareMode::Never => 0,
        CompareMode::Always => {
            count_call!(rects_filled);
            for y in y1..y2 {
                kernel.fill_row(target.row_span_mut(y, x1, x2), depth);
            }
            (x2 - x1) * (y2 - y1)
        }
        _ => match policy {
            RectCompare::Skip => 0,
            RectCompare::PerPixel => {
                count_call!(rects_filled);
                let candidate = depth as f32;
                let mut written = 0;
                for y in y1..y2 {
                    for cell in target.row_span_mut(y, x1, x2) {
                        if compare.passes(candidate, *cell as f32) {
                            *cell = depth;
                            written += 1;
                        }
                    }
                }
                count_add!(pixels_tested, (x2 - x1) * (y2 - y1));
                count_add!(depth_passed, written);
                count_add!(depth_failed, (x2 - x1) * (y2 - y1) - written);
                written
            }
        },
    }
}

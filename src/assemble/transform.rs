/// Model space to screen space
///
/// There is no clipping: positions are divided by `w` whatever its sign and
/// vertices with `w <= 0` are only flagged as behind, so primitives touching
/// them can be dropped by the stitcher.
use glam::Vec3;

use crate::gpu::GpuState;
use crate::raster::ScreenVert;

/// Transform `positions` into `out`. Returns `false` when every vertex is
/// behind the camera.
pub fn project_vertices(state: &GpuState, positions: &[Vec3], out: &mut [ScreenVert]) -> bool {
    let center = state.viewport.center;
    let scale = state.viewport.scale;
    let offset = state.offset16.as_vec2();

    let mut any_in_front = false;
    for (pos, sv) in positions.iter().zip(out.iter_mut()) {
        let clip = state.clip_position(*pos);
        let w = clip.w;
        let in_front = w > 0.0;
        any_in_front |= in_front;

        let ndc = clip.truncate() / w;
        let x16 = (ndc.x * scale.x + center.x) * 16.0 - offset.x;
        let y16 = (ndc.y * scale.y + center.y) * 16.0 - offset.y;
        let z = ndc.z * scale.z + center.z;

        // Subpixel bits are dropped here.
        *sv = ScreenVert {
            x: (x16 * (1.0 / 16.0)) as i32,
            y: (y16 * (1.0 / 16.0)) as i32,
            z: clamp_depth(z),
            behind: !in_front,
        };
    }

    any_in_front
}

/// Through-mode positions are already pixels.
pub fn passthrough_vertices(positions: &[Vec3], out: &mut [ScreenVert]) {
    for (pos, sv) in positions.iter().zip(out.iter_mut()) {
        *sv = ScreenVert {
            x: pos.x as i32,
            y: pos.y as i32,
            z: clamp_depth(pos.z),
            behind: false,
        };
    }
}

#[inline]
fn clamp_depth(z: f32) -> u16 {
    z.clamp(0.0, 65535.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::Viewport;
    use glam::{IVec2, Mat4, Vec4};

    #[test]
    fn viewport_and_offset_map_to_pixels() {
        let state = GpuState {
            viewport: Viewport {
                center: Vec3::new(2048.0, 2048.0, 1000.0),
                scale: Vec3::new(240.0, -136.0, 500.0),
            },
            offset16: IVec2::new((2048 - 240) * 16, (2048 - 136) * 16),
            ..GpuState::default()
        };
        let positions = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, -3.0)];
        let mut out = [ScreenVert::default(); 3];

        assert!(project_vertices(&state, &positions, &mut out));
        assert_eq!(out[0], ScreenVert::new(240, 136, 1000));
        assert_eq!(out[1], ScreenVert::new(480, 0, 1500));
        // z = -500 clamps to 0.
        assert_eq!(out[2], ScreenVert::new(0, 272, 0));
    }

    #[test]
    fn non_positive_w_marks_behind() {
        // w = z
        let projection = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::new(0.0, 0.0, 1.0, 1.0), Vec4::ZERO);
        let state = GpuState {
            projection,
            ..GpuState::default()
        };
        let mut out = [ScreenVert::default(); 3];

        let mixed = [Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)];
        assert!(project_vertices(&state, &mixed, &mut out));
        assert_eq!(out.map(|v| v.behind), [false, true, true]);

        let behind = [Vec3::new(1.0, 0.0, -1.0), Vec3::new(0.0, 1.0, -2.0)];
        assert!(!project_vertices(&state, &behind, &mut out[..2]));
    }

    #[test]
    fn passthrough_truncates_and_clamps() {
        let positions = [Vec3::new(3.9, 7.2, 70000.0), Vec3::new(-0.5, 2.0, -4.0)];
        let mut out = [ScreenVert::default(); 2];
        passthrough_vertices(&positions, &mut out);
        assert_eq!(out[0], ScreenVert::new(3, 7, 65535));
        assert_eq!(out[1], ScreenVert::new(0, 2, 0));
    }
}

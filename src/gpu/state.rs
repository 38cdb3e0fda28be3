/// Snapshot of the emulated GPU registers the depth pre-pass reads
use glam::{Affine3A, IVec2, Mat4, Vec3, Vec4};

use crate::raster::CompareMode;

/// Viewport transform from normalized device coordinates to screen pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub center: Vec3,
    pub scale: Vec3,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GpuState {
    pub depth_test_enabled: bool,
    pub depth_write_enabled: bool,
    pub clear_mode: bool,
    /// Depth mask bit of clear mode; clears only touch depth when set.
    pub clear_mode_depth_write: bool,
    pub depth_compare: CompareMode,

    pub world: Affine3A,
    pub view: Affine3A,
    pub projection: Mat4,

    pub viewport: Viewport,
    /// Screen offset in 1/16 pixel units, subtracted after the viewport.
    pub offset16: IVec2,
}

impl Default for GpuState {
    fn default() -> Self {
        Self {
            depth_test_enabled: true,
            depth_write_enabled: true,
            clear_mode: false,
            clear_mode_depth_write: false,
            depth_compare: CompareMode::Always,
            world: Affine3A::IDENTITY,
            view: Affine3A::IDENTITY,
            projection: Mat4::IDENTITY,
            viewport: Viewport::default(),
            offset16: IVec2::ZERO,
        }
    }
}

impl GpuState {
    /// Load matrices in register layout: 4x3 world and view (four columns of
    /// three), 4x4 projection (four columns of four).
    pub fn with_raw_matrices(mut self, world: &[f32; 12], view: &[f32; 12], projection: &[f32; 16]) -> Self {
        self.world = Affine3A::from_cols_array(world);
        self.view = Affine3A::from_cols_array(view);
        self.projection = Mat4::from_cols_array(projection);
        self
    }

    /// Model position through world, view and projection.
    #[inline]
    pub fn clip_position(&self, position: Vec3) -> Vec4 {
        let world = self.world.transform_point3(position);
        let view = self.view.transform_point3(world);
        self.projection * view.extend(1.0)
    }

    /// The comparison the draw will run with. Clear mode always passes; an
    /// `Err` means the register state keeps the draw from changing depth.
    pub fn effective_compare(&self) -> Result<CompareMode, DepthGate> {
        if self.clear_mode {
            if !self.clear_mode_depth_write {
                return Err(DepthGate::ClearWithoutDepthWrite);
            }
            return Ok(CompareMode::Always);
        }
        if !self.depth_test_enabled {
            return Err(DepthGate::DepthTestDisabled);
        }
        if !self.depth_write_enabled {
            return Err(DepthGate::DepthWriteDisabled);
        }
        Ok(self.depth_compare)
    }
}

/// Why the register state rules out depth writes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DepthGate {
    ClearWithoutDepthWrite,
    DepthTestDisabled,
    DepthWriteDisabled,
}

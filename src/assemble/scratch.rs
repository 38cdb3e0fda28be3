use glam::Vec3;

use crate::error::RasterError;
use crate::raster::ScreenVert;

/// Largest vertex count a single GE draw can carry.
pub const MAX_DRAW_VERTICES: usize = 0x10000;

/// Per-draw working memory: decoded positions and their screen-space results.
///
/// Allocated once and reused across draws so the per-draw path stays
/// allocation free.
pub struct DrawScratch {
    positions: Vec<Vec3>,
    screen: Vec<ScreenVert>,
}

impl DrawScratch {
    /// Room for the largest possible draw.
    pub fn new() -> Self {
        Self::with_capacity(MAX_DRAW_VERTICES)
    }

    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; max_vertices],
            screen: vec![ScreenVert::default(); max_vertices],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Both regions, trimmed to `count` entries.
    pub fn split_mut(&mut self, count: usize) -> Result<(&mut [Vec3], &mut [ScreenVert]), RasterError> {
        if count > self.capacity() {
            return Err(RasterError::ScratchTooSmall {
                requested: count,
                capacity: self.capacity(),
            });
        }
        Ok((&mut self.positions[..count], &mut self.screen[..count]))
    }
}

impl Default for DrawScratch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_checks_capacity() {
        let mut scratch = DrawScratch::with_capacity(6);
        let (positions, screen) = scratch.split_mut(6).unwrap();
        assert_eq!((positions.len(), screen.len()), (6, 6));

        assert_eq!(
            scratch.split_mut(7).err(),
            Some(RasterError::ScratchTooSmall {
                requested: 7,
                capacity: 6,
            })
        );
    }
}

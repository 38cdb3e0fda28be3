/// Depth buffer writers: rectangle filler and triangle rasterizer
pub mod compare;
pub mod rect;
pub mod target;
pub mod triangle;

pub use compare::CompareMode;
pub use rect::fill_rect_in;
pub use target::{DepthBuffer, DepthTarget, ScissorRect};
pub use triangle::{rasterize_triangle_in, CullMode, ScreenVert};

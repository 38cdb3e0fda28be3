/// Lane vectors and the runtime-selected wide/scalar strategy
pub mod kernel;
pub mod lanes;

pub use kernel::{RowKernel, ScalarKernel, SimdMode, DEPTH_LANES};
pub use lanes::{Vec4F32, Vec4S32};

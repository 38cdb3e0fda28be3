/// Interfaces to the emulated GPU: register state and vertex descriptors
pub mod state;
pub mod vertex;

pub use state::{DepthGate, GpuState, Viewport};
pub use vertex::{
    DecodedLayout, IndexFormat, PositionFormat, PrimitiveType, VertexDecoder, VertexType,
    WeightFormat, Winding,
};

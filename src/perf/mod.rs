/// Performance measurement utilities
/// Counters are compiled in only with the `profiling` feature; the types are
/// always available so benches can print reports unconditionally.
pub mod profiling;

pub use profiling::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};

//! Text measurement and greedy line wrapping.
//!
//! Layout code never estimates text width: it asks a [`TextMeasure`] implementation, which in
//! production shapes the string with Parley against the same font bytes the rasterizer uses.

/// Measurement contract, anchoring helper and the Parley-backed implementation.
pub mod metrics;
/// Greedy word wrapping.
pub mod wrap;

pub use metrics::{Anchor, FontWeight, ParleyMeasure, TextMeasure, anchored_x};
pub use wrap::wrap_greedy;

//! Simulation core for the floaty widget.
//!
//! Everything here is platform-neutral and host-testable: entity state,
//! spawn placement, the per-tick motion/separation integrator, hover easing,
//! and the circular text layout. Rendering and input are seams implemented
//! by the embedding frontend.

pub mod config;
pub mod constants;
pub mod field;
pub mod floaty;
pub mod render;
pub mod text;

pub use config::*;
pub use constants::*;
pub use field::*;
pub use floaty::*;
pub use render::*;
pub use text::*;

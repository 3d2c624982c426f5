//! UI rendering
//!
//! Layout, the main render pass, and the externalized label bundle.

pub mod labels;
mod layout;
mod render;

pub use layout::{get_layout, AppLayout};
pub use render::render;

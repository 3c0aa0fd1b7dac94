//! User interface rendering layer.
//!
//! ```text
//! AppState → UIViewModel::compute → UIViewModel { Layout, text } → components → ANSI Output
//!                                          └─ Layout::hit_test ← mouse clicks
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready text for one frame
//! - [`layout`]: Screen geometry and hit-testing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Text measurement, truncation and date formatting
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Hit, Layout, Rect};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DetailPanel, FooterInfo, HeaderInfo, StatusLine, UIViewModel};

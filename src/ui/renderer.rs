//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the state, then hand
//! it to the components. The same view model's layout answers mouse clicks,
//! which is why the plugin keeps the last one around.
//!
//! # Example
//!
//! ```rust,no_run
//! use tierlist::app::AppState;
//! use tierlist::catalog::CatalogLocation;
//! use tierlist::domain::FilterLabel;
//! use tierlist::ui::{render, Theme};
//!
//! let state = AppState::new(CatalogLocation::default(), FilterLabel::All, Theme::default());
//! let viewmodel = render(&state, 24, 80);
//! assert_eq!(viewmodel.layout.rows, 24);
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout and returns the view model that was drawn.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) -> UIViewModel {
    let viewmodel = UIViewModel::compute(state, rows, cols);
    components::render_frame(&viewmodel, &state.theme);
    viewmodel
}

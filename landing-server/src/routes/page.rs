//! Landing page endpoint

use crate::render;
use crate::state::AppState;
use axum::extract::State;
use landing_core::TransientIndicator;
use maud::Markup;
use std::sync::Arc;

/// Render the landing page
///
/// Every view gets its own indicator, starting in the default state.
pub async fn home_page(State(state): State<Arc<AppState>>) -> Markup {
    let indicator = TransientIndicator::new(state.indicator.clone());
    render::home_page(&indicator)
}

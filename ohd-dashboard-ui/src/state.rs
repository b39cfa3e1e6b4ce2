//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the [`ViewState`] in a Signal and is provided once via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. It implements [`StateHandle`] so the
//! controller operations in `ohd_core` can drive it directly.

use dioxus::prelude::*;
use ohd_core::controller::StateHandle;
use ohd_core::view_state::ViewState;

/// Shared state of the hazard dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selection, last snapshot, loading phase and report draft
    pub view: Signal<ViewState>,
}

impl AppState {
    /// Create a new AppState with a fresh, idle view.
    pub fn new() -> Self {
        Self {
            view: Signal::new(ViewState::new()),
        }
    }

    pub fn loading(&self) -> bool {
        self.view.read().loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHandle for AppState {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&*self.view.read())
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut *self.view.write())
    }
}

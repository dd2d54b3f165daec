//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> State
//! - Event: terminal input turned into actions

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{
    AppState, CatalogState, ListingField, ListingForm, RegistrationField, RegistrationForm,
    StatusBarState, UiConfig,
};

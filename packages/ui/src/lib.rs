//! This crate contains all shared UI for the workspace.
//!
//! Platform packages mount [`AppProvider`] around their router and wrap
//! [`views::LoginView`] / [`views::RecipesView`] with their own navigation.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod session;
pub use session::{
    use_auth, use_client, use_config, use_session_store, AppProvider, AuthState, LogoutButton,
    PlatformSession, PlatformStorage,
};

mod scheduler;
pub use scheduler::{sleep, TaskScheduler};

mod header;
pub use header::Header;

mod filters;
pub use filters::RecipeFilters;

mod recipe_card;
pub use recipe_card::{RecipeCardView, PLACEHOLDER_IMAGE};

mod recipe_modal;
pub use recipe_modal::RecipeModal;

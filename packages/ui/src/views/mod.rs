mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::{LoginView, LOGIN_SUCCESS};

mod recipes;
pub use recipes::RecipesView;

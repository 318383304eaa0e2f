mod login;
pub use login::Login;

mod recipes;
pub use recipes::Recipes;

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod events;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod schedule;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use catalog::{Catalog, CatalogEvent};
pub use config::RecipesConfig;
pub use detail::{format_time, DetailPresenter, RecipeCard, RecipeDetail};
pub use error::{Error, Result};
pub use events::{Listeners, Subscription};
pub use filter::{filter, FilterState};
pub use models::{Difficulty, RecipeRecord, SessionRecord, UserRecord};
pub use pagination::PaginationView;
pub use schedule::{Debouncer, ManualScheduler, Scheduler};
pub use session::{KeyValueStorage, SessionStore};

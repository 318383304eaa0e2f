use dioxus::prelude::*;
use tracing::{warn, Level};

use store::RecipesConfig;
use ui::AppProvider;
use views::{Login, Recipes};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/recipes")]
    Recipes {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled defaults; edit and rebuild to point at another API.
const CONFIG_TOML: &str = include_str!("../assets/recipes.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

fn load_config() -> RecipesConfig {
    RecipesConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        warn!("Invalid {}, using defaults: {e}", RecipesConfig::filename());
        RecipesConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/recipes`; the recipes page sends anonymous users on to `/login`.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Recipes {});
    rsx! {}
}

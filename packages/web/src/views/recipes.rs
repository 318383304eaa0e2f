use dioxus::prelude::*;
use ui::views::RecipesView;

use crate::Route;

#[component]
pub fn Recipes() -> Element {
    let nav = use_navigator();

    rsx! {
        RecipesView {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

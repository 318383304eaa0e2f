//! Search box and cuisine dropdown above the grid.

use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn RecipeFilters(
    search: String,
    cuisine: String,
    cuisines: Vec<String>,
    on_search: EventHandler<String>,
    on_cuisine: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "recipe-filters",
            label {
                class: "recipe-filters__search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "search",
                    placeholder: "Search recipes...",
                    value: "{search}",
                    oninput: move |evt: FormEvent| on_search.call(evt.value()),
                }
            }
            select {
                class: "recipe-filters__cuisine",
                value: "{cuisine}",
                onchange: move |evt: FormEvent| on_cuisine.call(evt.value()),
                option { value: "", "All Cuisines" }
                for name in cuisines {
                    option {
                        key: "{name}",
                        value: "{name}",
                        selected: name == cuisine,
                        "{name}"
                    }
                }
            }
        }
    }
}

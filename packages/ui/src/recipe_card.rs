//! One tile in the recipe grid.

use dioxus::prelude::*;
use store::RecipeCard;

use crate::icons::{FaClock, FaStar, FaUtensils};
use crate::Icon;

/// Shown when a recipe image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

#[component]
pub fn RecipeCardView(card: RecipeCard, on_view: EventHandler<u32>) -> Element {
    let mut broken = use_signal(|| false);
    let id = card.id;
    let image = if broken() || card.image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        card.image.clone()
    };
    let difficulty = card.difficulty.as_str();

    rsx! {
        article {
            class: "recipe-card",
            img {
                class: "recipe-card__image",
                src: "{image}",
                alt: "{card.name}",
                loading: "lazy",
                onerror: move |_| broken.set(true),
            }
            div {
                class: "recipe-card__body",
                h3 { class: "recipe-card__title", "{card.name}" }
                div {
                    class: "recipe-card__meta",
                    span {
                        class: "recipe-card__time",
                        Icon { icon: FaClock, width: 12, height: 12 }
                        "{card.total_time}"
                    }
                    span {
                        class: "difficulty difficulty--{difficulty}",
                        "{card.difficulty}"
                    }
                    span {
                        class: "recipe-card__rating",
                        Icon { icon: FaStar, width: 12, height: 12 }
                        "{card.rating}"
                    }
                }
                span {
                    class: "recipe-card__cuisine",
                    Icon { icon: FaUtensils, width: 12, height: 12 }
                    "{card.cuisine}"
                }
                p { class: "recipe-card__ingredients", "{card.ingredients_preview}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_view.call(id),
                    "View Recipe"
                }
            }
        }
    }
}

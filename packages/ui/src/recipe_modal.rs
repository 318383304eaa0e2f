//! Full recipe shown over the grid.

use dioxus::prelude::*;
use store::RecipeDetail;

use crate::icons::{FaStar, FaXmark};
use crate::recipe_card::PLACEHOLDER_IMAGE;
use crate::views::ModalOverlay;
use crate::Icon;

#[component]
pub fn RecipeModal(detail: RecipeDetail, on_close: EventHandler<()>) -> Element {
    let mut broken = use_signal(|| false);
    let image = if broken() || detail.image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        detail.image.clone()
    };
    let difficulty = detail.difficulty.as_str();

    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "recipe-modal",
                button {
                    class: "recipe-modal__close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
                img {
                    class: "recipe-modal__image",
                    src: "{image}",
                    alt: "{detail.name}",
                    onerror: move |_| broken.set(true),
                }
                h2 { "{detail.name}" }

                dl {
                    class: "recipe-modal__facts",
                    dt { "Prep Time" }
                    dd { "{detail.prep_time}" }
                    dt { "Cook Time" }
                    dd { "{detail.cook_time}" }
                    if let Some(servings) = detail.servings {
                        dt { "Servings" }
                        dd { "{servings}" }
                    }
                    dt { "Difficulty" }
                    dd {
                        span { class: "difficulty difficulty--{difficulty}", "{detail.difficulty}" }
                    }
                    dt { "Cuisine" }
                    dd { "{detail.cuisine}" }
                    if !detail.meal_types.is_empty() {
                        dt { "Meal Type" }
                        dd { "{detail.meal_types}" }
                    }
                    if let Some(calories) = detail.calories.as_ref() {
                        dt { "Calories" }
                        dd { "{calories}" }
                    }
                }

                div {
                    class: "recipe-modal__rating",
                    Icon { icon: FaStar, width: 14, height: 14 }
                    strong { "{detail.rating}" }
                    if let Some(reviews) = detail.reviews.as_ref() {
                        span { class: "recipe-modal__reviews", "{reviews}" }
                    }
                }

                if !detail.tags.is_empty() {
                    div {
                        class: "recipe-modal__tags",
                        for tag in detail.tags.iter() {
                            span { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }

                h3 { "Ingredients" }
                ul {
                    for (i, ingredient) in detail.ingredients.iter().enumerate() {
                        li { key: "{i}", "{ingredient}" }
                    }
                }

                h3 { "Instructions" }
                ol {
                    for (i, step) in detail.instructions.iter().enumerate() {
                        li { key: "{i}", "{step}" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::icons::FaUtensils;
use crate::session::{use_auth, LogoutButton};
use crate::Icon;

/// Top bar with the app title, the signed-in user and a logout button.
#[component]
pub fn Header(on_logout: EventHandler<()>) -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-header__brand",
                Icon { icon: FaUtensils, width: 18, height: 18 }
                h1 { "Recipe Explorer" }
            }
            div {
                class: "app-header__user",
                if !name.is_empty() {
                    span { "Welcome, {name}" }
                }
                LogoutButton {
                    class: "btn btn-secondary",
                    on_logout: on_logout,
                }
            }
        }
    }
}

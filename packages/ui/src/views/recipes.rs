use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error, info, warn};

use api::RecipeSource;
use store::{Catalog, CatalogEvent, Debouncer, FilterState};
use crate::scheduler::TaskScheduler;
use crate::session::{use_auth, use_client, use_config, use_session_store};
use crate::{Header, RecipeCardView, RecipeFilters, RecipeModal};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared recipes page: header, filters, paginated grid and detail modal.
///
/// Without a session nothing is fetched and `on_unauthenticated` fires so the
/// platform can route back to its login page.
#[component]
pub fn RecipesView(on_unauthenticated: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let client = use_client();
    let session = use_session_store();
    let config = use_config();

    let page_size = config.catalog.page_size;
    let debounce = config.catalog.search_debounce();
    let mut catalog = use_signal(move || Catalog::new(page_size));
    let mut debouncer = use_signal(move || Debouncer::new(TaskScheduler, debounce));
    let mut search = use_signal(String::new);
    let mut cuisine = use_signal(String::new);
    let mut status = use_signal(String::new);

    // Storage is the source of truth; another tab may have logged out
    use_effect(move || {
        let next = auth.peek().synced_with(session.load());
        if let Some(next) = next {
            debug!(authenticated = next.is_authenticated(), "Session changed in storage");
            auth.set(next);
        }
    });

    use_effect(move || {
        if !auth().is_authenticated() {
            on_unauthenticated.call(());
        }
    });

    // Dropped with the component
    let _subscription = use_hook(move || {
        Rc::new(catalog.peek().subscribe(move |event| {
            debug!(?event, "Catalog event");
            if let CatalogEvent::Refiltered { matched, .. } = event {
                status.set(match matched {
                    1 => "1 recipe".to_string(),
                    n => format!("{n} recipes"),
                });
            }
        }))
    });

    let mut recipes = use_resource(move || {
        let client = client.clone();
        async move {
            if !auth.peek().is_authenticated() {
                return Ok(());
            }
            debug!("Fetching recipes");
            match client.fetch_recipes().await {
                Ok(records) => {
                    info!(count = records.len(), "Recipes loaded");
                    catalog.write().load(records);
                    Ok(())
                }
                Err(e) => {
                    error!("Failed to load recipes: {}", e.detail());
                    Err(e)
                }
            }
        }
    });

    let on_search = move |value: String| {
        search.set(value.clone());
        debouncer
            .write()
            .call(move || catalog.write().set_query(value));
    };

    let on_cuisine = move |value: String| {
        cuisine.set(value.clone());
        debouncer.write().cancel();
        catalog.write().set_filter(FilterState::new(search(), value));
    };

    let on_view = move |id: u32| {
        if let Err(e) = catalog.write().open_detail(id) {
            warn!(id, "Cannot open recipe: {}", e.detail());
        }
    };

    let pending = *recipes.state().read() == UseResourceState::Pending;
    let outcome = recipes.read().clone();

    let content = match outcome {
        _ if pending => rsx! {
            div {
                class: "recipes-loading",
                span { class: "spinner" }
                p { "Loading recipes..." }
            }
        },
        None => rsx! {},
        Some(Err(e)) => rsx! {
            div {
                class: "error-message",
                h3 { "{e}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| recipes.restart(),
                    "Try Again"
                }
            }
        },
        Some(Ok(())) => {
            let view = catalog.read();
            let cards = view.visible_cards();
            let has_more = view.has_more();
            let cuisines = view.cuisines();
            let detail = view.current_detail();
            drop(view);

            rsx! {
                RecipeFilters {
                    search: search(),
                    cuisine: cuisine(),
                    cuisines: cuisines,
                    on_search: on_search,
                    on_cuisine: on_cuisine,
                }
                p { class: "recipes-status", "aria-live": "polite", "{status}" }

                if cards.is_empty() {
                    div { class: "recipes-empty", "No recipes found" }
                } else {
                    div {
                        class: "recipes-grid",
                        for card in cards {
                            RecipeCardView {
                                key: "{card.id}",
                                card: card,
                                on_view: on_view,
                            }
                        }
                    }
                }

                if has_more {
                    div {
                        class: "recipes-more",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                catalog.write().show_more();
                            },
                            "Load More"
                        }
                    }
                }

                if let Some(detail) = detail {
                    RecipeModal {
                        detail: detail,
                        on_close: move |_| catalog.write().close_detail(),
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "recipes-page",
            Header { on_logout: on_logout }
            main {
                class: "recipes-main",
                {content}
            }
        }
    }
}

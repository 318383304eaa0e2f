use dioxus::prelude::*;

use api::AuthFlow;
use crate::scheduler::sleep;
use crate::session::{use_auth, use_client, use_config, use_session_store, AuthState};
use crate::icons::FaUtensils;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";

#[derive(Clone, Debug, PartialEq)]
enum Message {
    Error(String),
    Success(&'static str),
}

/// Shared login form.
///
/// `on_authenticated` fires once a session exists: immediately when the page
/// is opened with a stored session, otherwise after the redirect delay that
/// follows a successful login.
#[component]
pub fn LoginView(on_authenticated: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let client = use_client();
    let session = use_session_store();
    let config = use_config();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut message = use_signal(|| Option::<Message>::None);

    // Already logged in: skip the form
    use_effect(move || {
        if auth().is_authenticated() {
            on_authenticated.call(());
        }
    });

    let redirect_delay = config.session.redirect_delay();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let flow = AuthFlow::new(client.clone(), session.clone());
        spawn(async move {
            loading.set(true);
            message.set(None);
            let result = flow.login(&username(), &password()).await;
            loading.set(false);
            match result {
                Ok(user) => {
                    message.set(Some(Message::Success(LOGIN_SUCCESS)));
                    sleep(redirect_delay).await;
                    auth.set(AuthState { user: Some(user) });
                }
                Err(e) => message.set(Some(Message::Error(e.to_string()))),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: onsubmit,

                div {
                    class: "login-card__brand",
                    Icon { icon: FaUtensils, width: 28, height: 28 }
                    h1 { "Recipe Explorer" }
                }
                p { class: "login-card__hint", "Sign in with a DummyJSON username, e.g. emilys" }

                div {
                    class: "form-field",
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary login-card__submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        span { class: "spinner" }
                    } else {
                        "Login"
                    }
                }

                match message() {
                    Some(Message::Error(text)) => rsx! {
                        p { class: "form-message form-message--error", "{text}" }
                    },
                    Some(Message::Success(text)) => rsx! {
                        p { class: "form-message form-message--success", "{text}" }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}

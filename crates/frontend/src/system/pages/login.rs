use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, use_auth};

pub const DEFAULT_EMAIL: &str = "admin@demo.com";
pub const DEFAULT_PASSWORD: &str = "12345678";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(DEFAULT_EMAIL.to_string());
    let (password, set_password) = signal(DEFAULT_PASSWORD.to_string());
    let (remember, set_remember) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(&request).await {
                // switches the shell to the main layout
                Ok(response) => auth.login(response, request.remember),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"InstaFix Admin"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message" role="alert">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email address"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="remember"
                            prop:checked=move || remember.get()
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                            disabled=move || is_loading.get()
                        />
                        <label for="remember">"Remember me"</label>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

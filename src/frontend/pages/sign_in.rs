//! Sign-in page

use leptos::ev;
use leptos::prelude::*;

use crate::api::ServerFnAuthenticator;
use crate::form::{Authenticator, FormState};
use crate::frontend::components::{Button, Checkbox, EmailInput, ErrorAlert, PasswordInput};
use crate::types::Field;

/// Email/password form with live validation.
///
/// The submit button stays disabled until an input differs from its
/// default and every rule passes. Errors returned by the server land on
/// their input; form-level ones are shown in a banner above the form.
#[component]
pub fn SignInPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    let email = Signal::derive(move || form.with(|f| f.values().email.clone()));
    let password = Signal::derive(move || form.with(|f| f.values().password.clone()));
    let remember = Signal::derive(move || form.with(|f| f.values().remember));

    let email_error =
        Signal::derive(move || form.with(|f| f.error(Field::Email).map(str::to_string)));
    let password_error =
        Signal::derive(move || form.with(|f| f.error(Field::Password).map(str::to_string)));
    let root_errors = move || {
        form.with(|f| f.root_errors()
                .iter()
                .map(|(_, message)| message.clone())
                .collect::<Vec<_>>())
    };

    let disabled = Signal::derive(move || !form.with(FormState::can_submit));
    let pending = Signal::derive(move || form.with(FormState::is_pending));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut request = None;
        form.update(|f| request = f.begin_submit());
        let Some(request) = request else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = ServerFnAuthenticator
                .sign_in_with_email_and_password(&request.email, &request.password)
                .await;
            form.update(|f| {
                f.finish_submit(result);
            });
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="w-full max-w-md">
                <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <h1 class="text-2xl font-bold text-white">"Sign in"</h1>
                    </div>

                    {move || {
                        root_errors()
                            .into_iter()
                            .map(|message| view! { <ErrorAlert message=message /> })
                            .collect_view()
                    }}

                    <form name="loginForm" novalidate=true class="space-y-5" on:submit=on_submit>
                        <EmailInput
                            label="Email"
                            value=email
                            error=email_error
                            on_input=Callback::new(move |value: String| {
                                form.update(|f| f.set_email(value))
                            })
                        />
                        <PasswordInput
                            label="Password"
                            value=password
                            error=password_error
                            on_input=Callback::new(move |value: String| {
                                form.update(|f| f.set_password(value))
                            })
                        />
                        <Checkbox
                            label="Remember me"
                            name="remember"
                            checked=remember
                            on_toggle=Callback::new(move |checked: bool| {
                                form.update(|f| f.set_remember(checked))
                            })
                        />
                        <Button disabled=disabled loading=pending loading_text="Signing in...">
                            "Sign in"
                        </Button>
                    </form>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

const INPUT_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-slate-800 border text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:border-transparent transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] autofocus: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let has_error = move || error.with(Option::is_some);
    let label_for = name.clone();
    let id = name.clone();
    let helper_id = format!("{}-helper", name);
    let described_by = helper_id.clone();

    view! {
        <div>
            <label for=label_for class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=id
                name=name
                placeholder=placeholder
                required=required
                autofocus=autofocus
                aria-invalid=move || has_error().to_string()
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=move || {
                    if has_error() {
                        format!("{} border-red-500 focus:ring-red-500", INPUT_CLASSES)
                    } else {
                        format!("{} border-slate-700 focus:ring-orange-500", INPUT_CLASSES)
                    }
                }
            />
            <p id=helper_id class="mt-1 text-xs text-red-400">
                {move || error.get()}
            </p>
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            required=true
            autofocus=true
            value=value
            error=error
            on_input=on_input
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            value=value
            error=error
            on_input=on_input
        />
    }
}

use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    let label_for = name.clone();
    let id = name.clone();

    view! {
        <label for=label_for class="flex items-center gap-2 text-sm text-slate-300">
            <input
                type="checkbox"
                id=id
                name=name
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                class="w-4 h-4 rounded border-slate-700 bg-slate-800 text-orange-500 focus:ring-orange-500"
            />
            {label}
        </label>
    }
}

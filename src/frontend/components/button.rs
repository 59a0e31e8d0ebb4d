use leptos::prelude::*;

#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center px-8 py-4 text-lg font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950";

    let variant_classes = "bg-gradient-to-r from-orange-500 to-amber-500 text-white hover:from-orange-600 hover:to-amber-600 hover:shadow-lg hover:shadow-orange-500/25 focus:ring-orange-500";

    let classes = format!(
        "{} {} w-full disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    let loading_text = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get() || loading.get()
        >
            {move || {
                if loading.get() {
                    view! {
                        <span class="flex items-center justify-center gap-2">
                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                            {loading_text.clone()}
                        </span>
                    }
                    .into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}

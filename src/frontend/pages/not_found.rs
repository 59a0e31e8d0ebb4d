use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="text-center">
                <h1 class="text-8xl font-bold text-orange-400 mb-4">"404"</h1>
                <p class="text-2xl font-semibold text-white mb-8">"Page not found"</p>
                <a href="/sign-in" class="text-orange-400 hover:text-orange-300 font-medium">"Go to sign in"</a>
            </div>
        </div>
    }
}

use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container not-found-page">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"There's nothing at this address."</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the portfolio"</A>
            </nav>
        </main>
    }
}

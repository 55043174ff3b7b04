pub mod components;
pub mod config;
pub mod console;
pub mod content;
pub mod dom;
pub mod interaction;
pub mod pages;

use components::App;
use config::{load_config, SiteConfig};
use leptos::*;
use leptos_router::*;
use pages::NotFoundPage;
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The page failed to render. Try reloading."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <Router>
                <Routes>
                    <Route path="/" view=App/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    console::print_banner();
    mount_to_body(move || view! { <Root config=config/> });
}

use crate::config::SiteConfig;
use crate::dom::scroll_to_section;
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let nav_height = config.nav_height;

    view! {
        <section id="home" class="hero">
            <div class="container hero-content">
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-title">{config.owner_name.clone()}</h1>
                <p class="hero-subtitle">"Software developer building fast, accessible web experiences."</p>
                <div class="hero-buttons">
                    <a
                        href="#projects"
                        class="btn btn-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("projects", nav_height);
                        }
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="btn btn-secondary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("contact", nav_height);
                        }
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-content">
                    <p>
                        "I enjoy turning rough ideas into small, dependable tools. Most of my "
                        "work sits where the browser meets systems programming: Rust compiled to "
                        "WebAssembly, tidy TypeScript, and interfaces that stay responsive."
                    </p>
                    <p>
                        "When I'm not coding I'm usually reading about typography, sketching "
                        "layouts, or helping friends debug their side projects."
                    </p>
                </div>
            </div>
        </section>
    }
}

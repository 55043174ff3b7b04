use crate::dom::smooth_scroll_to;
use leptos::*;

// Self-contained so the button works without the site stylesheet.
const SCROLL_TOP_STYLES: &str = r#"
    .scroll-top-btn {
        position: fixed;
        bottom: 30px;
        right: 30px;
        width: 50px;
        height: 50px;
        background: var(--primary-color);
        color: white;
        border: none;
        border-radius: 50%;
        font-size: 1.5rem;
        cursor: pointer;
        opacity: 0;
        visibility: hidden;
        transition: all 0.3s ease;
        box-shadow: var(--shadow-lg);
        z-index: 999;
    }

    .scroll-top-btn.visible {
        opacity: 1;
        visibility: visible;
    }

    .scroll-top-btn:hover {
        background: var(--primary-dark);
        transform: translateY(-3px);
    }

    @media (max-width: 768px) {
        .scroll-top-btn {
            bottom: 20px;
            right: 20px;
            width: 45px;
            height: 45px;
        }
    }
"#;

#[component]
pub fn ScrollTopButton(visible: Signal<bool>) -> impl IntoView {
    view! {
        <style>{SCROLL_TOP_STYLES}</style>
        <button
            class="scroll-top-btn"
            class:visible=move || visible.get()
            aria-label="Scroll to top"
            on:click=move |_| smooth_scroll_to(0.0)
        >
            "\u{2191}"
        </button>
    }
}

use crate::components::{
    AboutSection, ContactSection, Footer, HeroSection, NavBar, ProjectsSection, ScrollTopButton,
    SkillsSection,
};
use crate::config::SiteConfig;
use crate::console::log_warning;
use crate::dom::{
    hide_for_reveal, page_offset, reveal, sections_in, span_of, VisibilityObserver,
};
use crate::interaction::{next_active_link, RevealTracker, ScrollState, SectionSpan};
use leptos::html::Main;
use leptos::*;
use wasm_bindgen::JsCast;

/// The portfolio page. Owns the scroll reactor and the section fade-in.
#[component]
pub fn App() -> impl IntoView {
    let config = store_value(use_context::<SiteConfig>().unwrap_or_default());
    let main_ref = create_node_ref::<Main>();
    let sections = store_value(Vec::<web_sys::HtmlElement>::new());
    let reveal_observer = store_value(None::<VisibilityObserver>);

    let (scroll, set_scroll) = create_signal(ScrollState::default());
    let (active_link, set_active_link) = create_signal(None::<String>);

    // Offsets are re-read on every scroll: images and fonts can shift layout
    let update_scroll = move || {
        let spans: Vec<SectionSpan> = sections.with_value(|s| s.iter().map(span_of).collect());
        let state = config.with_value(|c| ScrollState::at(page_offset(), &spans, c));
        set_active_link.update(|active| *active = next_active_link(active.take(), &state));
        set_scroll.set(state);
    };

    main_ref.on_load(move |main| {
        let found = sections_in(&main);
        for section in &found {
            hide_for_reveal(section);
        }

        let (threshold, root_margin) =
            config.with_value(|c| (c.reveal_threshold, c.reveal_root_margin.clone()));
        let mut tracker = RevealTracker::default();
        let observer = VisibilityObserver::new(threshold, &root_margin, move |entry, observer| {
            let target = entry.target();
            if !tracker.observe(&target.id(), entry.is_intersecting()) {
                return;
            }
            if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
                reveal(el);
            }
            observer.unobserve(&target);
        });
        match observer {
            Ok(observer) => {
                for section in &found {
                    observer.observe(section);
                }
                reveal_observer.set_value(Some(observer));
            }
            Err(_) => {
                log_warning("Portfolio: section fade-in unavailable (no IntersectionObserver)");
                found.iter().for_each(reveal);
            }
        }

        sections.set_value(found);
        update_scroll();
    });

    let scroll_listener = window_event_listener(ev::scroll, move |_| update_scroll());
    on_cleanup(move || {
        scroll_listener.remove();
        reveal_observer.update_value(|o| *o = None);
    });

    let navbar_scrolled = create_memo(move |_| scroll.with(|s| s.navbar_scrolled));
    let scroll_top_visible = create_memo(move |_| scroll.with(|s| s.scroll_top_visible));

    view! {
        <NavBar scrolled=navbar_scrolled.into() active_section=active_link.into()/>
        <main node_ref=main_ref>
            <HeroSection/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ContactSection/>
        </main>
        <Footer/>
        <ScrollTopButton visible=scroll_top_visible.into()/>
    }
}

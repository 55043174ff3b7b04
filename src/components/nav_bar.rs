use crate::config::SiteConfig;
use crate::dom::{scroll_to_section, set_body_overflow};
use crate::interaction::{MenuState, NAV_LINKS};
use leptos::*;

#[component]
pub fn NavBar(
    /// Whether the page has scrolled far enough for the navbar shadow
    scrolled: Signal<bool>,
    /// Id of the section whose nav link is highlighted
    active_section: Signal<Option<String>>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let nav_height = config.nav_height;
    let menu = create_rw_signal(MenuState::Closed);

    create_effect(move |_| set_body_overflow(menu.get().body_overflow()));
    on_cleanup(|| set_body_overflow(MenuState::Closed.body_overflow()));

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let id = link.section_id;
            let is_active = move || active_section.with(|a| a.as_deref() == Some(id));
            view! {
                <li>
                    <a
                        href=link.href()
                        class="nav-link"
                        class:active=is_active
                        on:click=move |ev| {
                            ev.prevent_default();
                            menu.set(MenuState::Closed);
                            scroll_to_section(id, nav_height);
                        }
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <a
                    href="#home"
                    class="nav-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        menu.set(MenuState::Closed);
                        scroll_to_section("home", nav_height);
                    }
                >
                    {config.owner_name.clone()}
                </a>
                <ul id="navMenu" class="nav-menu" class:active=move || menu.get().is_open()>
                    {links}
                </ul>
                <button
                    id="menuToggle"
                    class="menu-toggle"
                    class:active=move || menu.get().is_open()
                    aria-label="Toggle navigation menu"
                    on:click=move |_| menu.update(|m| *m = m.toggled())
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

use crate::config::SiteConfig;
use crate::console::log_warning;
use crate::content::{Skill, SKILL_GROUPS};
use crate::dom::VisibilityObserver;
use crate::interaction::SkillsAnimation;
use leptos::html::Section;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::time::Duration;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let animation = create_rw_signal(SkillsAnimation::default());
    let fill_timer = store_value(None::<TimeoutHandle>);
    let observer_slot = store_value(None::<VisibilityObserver>);
    let section_ref = create_node_ref::<Section>();

    let fill_delay = Duration::from_millis(config.skills_fill_delay_ms);
    let threshold = config.skills_threshold;
    section_ref.on_load(move |section| {
        let observer = VisibilityObserver::new(threshold, "0px", move |entry, _| {
            let fired = animation
                .try_update(|a| {
                    a.on_visible(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                })
                .unwrap_or(false);
            if !fired {
                return;
            }
            match set_timeout_with_handle(move || animation.update(|a| a.fill()), fill_delay) {
                Ok(handle) => fill_timer.set_value(Some(handle)),
                // No timer: jump straight to the filled bars
                Err(_) => animation.update(|a| a.fill()),
            }
        });
        match observer {
            Ok(observer) => {
                observer.observe(&section);
                observer_slot.set_value(Some(observer));
            }
            Err(_) => log_warning("Portfolio: skills animation unavailable (no IntersectionObserver)"),
        }
    });
    on_cleanup(move || {
        observer_slot.update_value(|o| *o = None);
        if let Some(handle) = fill_timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <section id="skills" class="skills" node_ref=section_ref>
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="skill-category">
                                    <h3>{group.title}</h3>
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <SkillBar skill=skill animation=animation/> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, animation: RwSignal<SkillsAnimation>) -> impl IntoView {
    let Some(level) = skill.level() else {
        log_warning(&format!(
            "Portfolio: skipping skill {:?} with bad width {:?}",
            skill.name, skill.width
        ));
        return ().into_view();
    };

    view! {
        <div class="skill-item">
            <div class="skill-info">
                <span>{skill.name}</span>
                <span>{level.to_string()}</span>
            </div>
            <div class="skill-bar">
                <div
                    class="skill-progress"
                    style:width=move || animation.get().bar_width(level)
                ></div>
            </div>
        </div>
    }
    .into_view()
}

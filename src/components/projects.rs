use crate::content::{Project, PROJECTS};
use leptos::*;

const LIFTED: &str = "translateY(-10px)";
const RESTING: &str = "translateY(0)";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    // None until the pointer first enters, so the stylesheet's transform applies initially
    let (hovered, set_hovered) = create_signal(None::<bool>);

    view! {
        <article
            class="project-card"
            style:transform=move || match hovered.get() {
                Some(true) => LIFTED,
                Some(false) => RESTING,
                None => "",
            }
            on:mouseenter=move |_| set_hovered.set(Some(true))
            on:mouseleave=move |_| set_hovered.set(Some(false))
        >
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <ul class="project-tags">
                {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
            </ul>
        </article>
    }
}

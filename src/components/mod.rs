mod app;
mod contact_form;
mod footer;
mod hero;
mod nav_bar;
mod projects;
mod scroll_top;
mod skills;

pub use app::App;
pub use contact_form::ContactSection;
pub use footer::Footer;
pub use hero::{AboutSection, HeroSection};
pub use nav_bar::NavBar;
pub use projects::ProjectsSection;
pub use scroll_top::ScrollTopButton;
pub use skills::SkillsSection;

use crate::config::SiteConfig;
use crate::dom::current_year;
use leptos::*;

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("\u{a9} {year} {owner}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <footer class="footer">
            <div class="footer-content">
                <p>{copyright_line(current_year(), &config.owner_name)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "Ada Lovelace"),
            "© 2026 Ada Lovelace. All rights reserved."
        );
    }
}

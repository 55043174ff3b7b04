use std::collections::HashSet;

use crate::config::SiteConfig;

/// Vertical extent of one page section, in CSS pixels from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Presentation flags derived from one scroll offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub scroll_top_visible: bool,
    pub active_section: Option<String>,
}

impl ScrollState {
    pub fn at(offset: f64, sections: &[SectionSpan], config: &SiteConfig) -> Self {
        let probe = offset + config.active_section_lookahead;
        Self {
            navbar_scrolled: offset > config.navbar_shadow_offset,
            scroll_top_visible: offset > config.scroll_top_offset,
            active_section: sections
                .iter()
                .find(|s| s.contains(probe))
                .map(|s| s.id.clone()),
        }
    }
}

/// The highlight to show after a scroll. Links keep their previous highlight
/// when the probe falls between (or below) all sections.
pub fn next_active_link(previous: Option<String>, state: &ScrollState) -> Option<String> {
    state.active_section.clone().or(previous)
}

/// Whether a nav link `href` points at section `id`.
pub fn href_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Remembers which sections have faded in. A reveal is never reversed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Returns `true` only the first time `id` intersects.
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    #[cfg(test)]
    fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Smooth-scroll destination for a section, keeping it clear of the fixed navbar.
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
    (section_top - nav_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 600.0),
            SectionSpan::new("about", 600.0, 500.0),
            SectionSpan::new("skills", 1100.0, 400.0),
            SectionSpan::new("contact", 1500.0, 700.0),
        ]
    }

    #[test]
    fn test_top_of_page() {
        let state = ScrollState::at(0.0, &page(), &SiteConfig::default());
        assert_eq!(
            state,
            ScrollState {
                navbar_scrolled: false,
                scroll_top_visible: false,
                active_section: Some("home".to_string()),
            }
        );
    }

    #[test]
    fn test_navbar_threshold_is_strict() {
        let config = SiteConfig::default();
        assert!(!ScrollState::at(50.0, &[], &config).navbar_scrolled);
        assert!(ScrollState::at(51.0, &[], &config).navbar_scrolled);
    }

    #[test]
    fn test_scroll_top_threshold_is_strict() {
        let config = SiteConfig::default();
        assert!(!ScrollState::at(300.0, &[], &config).scroll_top_visible);
        assert!(ScrollState::at(300.5, &[], &config).scroll_top_visible);
    }

    #[test]
    fn test_active_section_uses_lookahead() {
        let config = SiteConfig::default();
        // 499 + 100 = 599 still inside home
        assert_eq!(
            ScrollState::at(499.0, &page(), &config).active_section.as_deref(),
            Some("home")
        );
        // 500 + 100 = 600 is the top edge of about
        assert_eq!(
            ScrollState::at(500.0, &page(), &config).active_section.as_deref(),
            Some("about")
        );
    }

    #[test]
    fn test_no_section_below_page() {
        let state = ScrollState::at(5000.0, &page(), &SiteConfig::default());
        assert_eq!(state.active_section, None);
        assert!(state.navbar_scrolled);
        assert!(state.scroll_top_visible);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let sections = vec![
            SectionSpan::new("first", 0.0, 1000.0),
            SectionSpan::new("second", 200.0, 1000.0),
        ];
        let state = ScrollState::at(300.0, &sections, &SiteConfig::default());
        assert_eq!(state.active_section.as_deref(), Some("first"));
    }

    #[test]
    fn test_highlight_persists_between_sections() {
        let gap = ScrollState::default();
        assert_eq!(
            next_active_link(Some("about".to_string()), &gap),
            Some("about".to_string())
        );
        let hit = ScrollState {
            active_section: Some("skills".to_string()),
            ..ScrollState::default()
        };
        assert_eq!(
            next_active_link(Some("about".to_string()), &hit),
            Some("skills".to_string())
        );
    }

    #[test]
    fn test_href_targets() {
        assert!(href_targets("#about", "about"));
        assert!(!href_targets("about", "about"));
        assert!(!href_targets("#about-me", "about"));
    }

    #[test]
    fn test_reveal_is_one_time() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.observe("about", false));
        assert!(!tracker.is_revealed("about"));
        assert!(tracker.observe("about", true));
        assert!(!tracker.observe("about", true));
        assert!(!tracker.observe("about", false));
        assert!(tracker.is_revealed("about"));
        assert!(tracker.observe("skills", true));
    }

    #[test]
    fn test_scroll_target_clamps_at_zero() {
        assert_eq!(scroll_target(600.0, 70.0), 530.0);
        assert_eq!(scroll_target(20.0, 70.0), 0.0);
    }
}

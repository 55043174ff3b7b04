use std::fmt;

/// Target fill of a progress bar, as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= 100 {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Parse an inline CSS width such as `"85%"`.
    pub fn parse_css_width(width: &str) -> Option<Self> {
        let number = width.trim().strip_suffix('%')?.trim();
        let value: f64 = number.parse().ok()?;
        if !(0.0..=100.0).contains(&value) {
            return None;
        }
        Self::new(value.round() as u8)
    }

    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Browsers may report a ratio a hair below the threshold that triggered the callback.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot fill animation for the skills section.
///
/// Bars render at their target width until the section first becomes visible,
/// collapse to zero, then grow back once the fill delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillsAnimation {
    #[default]
    Pending,
    Collapsed,
    Filled,
}

impl SkillsAnimation {
    /// Feed an intersection report. Returns `true` when the caller should
    /// schedule [`SkillsAnimation::fill`].
    pub fn on_visible(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        let below = ratio + RATIO_TOLERANCE < threshold;
        if *self != SkillsAnimation::Pending || !is_intersecting || below {
            return false;
        }
        *self = SkillsAnimation::Collapsed;
        true
    }

    pub fn fill(&mut self) {
        if *self == SkillsAnimation::Collapsed {
            *self = SkillsAnimation::Filled;
        }
    }

    #[cfg(test)]
    fn has_fired(self) -> bool {
        self != SkillsAnimation::Pending
    }

    /// Current inline width for a bar with the given target.
    pub fn bar_width(self, target: SkillLevel) -> String {
        match self {
            SkillsAnimation::Collapsed => "0".to_string(),
            SkillsAnimation::Pending | SkillsAnimation::Filled => target.css_width(),
        }
    }
}

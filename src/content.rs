//! Static page copy: the skills list and project cards.

use crate::interaction::SkillLevel;

pub struct Skill {
    pub name: &'static str,
    /// Inline CSS width the bar fills to, e.g. `"85%"`
    pub width: &'static str,
}

impl Skill {
    pub fn level(&self) -> Option<SkillLevel> {
        SkillLevel::parse_css_width(self.width)
    }
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &[
            Skill { name: "Rust", width: "85%" },
            Skill { name: "TypeScript", width: "80%" },
            Skill { name: "Python", width: "75%" },
        ],
    },
    SkillGroup {
        title: "Web",
        skills: &[
            Skill { name: "HTML & CSS", width: "90%" },
            Skill { name: "WebAssembly", width: "70%" },
            Skill { name: "Accessibility", width: "65%" },
        ],
    },
    SkillGroup {
        title: "Tooling",
        skills: &[
            Skill { name: "Git", width: "85%" },
            Skill { name: "CI/CD", width: "70%" },
            Skill { name: "SQL", width: "60%" },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Habit Tracker",
        description: "Offline-first habit tracker with streak statistics and a weekly heatmap.",
        tags: &["Rust", "WASM", "IndexedDB"],
    },
    Project {
        title: "Recipe Finder",
        description: "Search recipes by the ingredients already in your kitchen.",
        tags: &["TypeScript", "REST"],
    },
    Project {
        title: "Weather Dashboard",
        description: "Hourly forecasts and air-quality readings on a responsive dashboard.",
        tags: &["Python", "Charts"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_skill_width_parses() {
        for group in SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level().is_some(), "{} has width {:?}", skill.name, skill.width);
            }
        }
    }
}

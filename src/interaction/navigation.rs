/// Mobile menu visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// `overflow` for `<body>`: page scrolling is locked behind the open menu.
    pub fn body_overflow(self) -> &'static str {
        match self {
            MenuState::Open => "hidden",
            MenuState::Closed => "auto",
        }
    }
}

/// An entry in the navbar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section_id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { section_id: "home", label: "Home" },
    NavLink { section_id: "about", label: "About" },
    NavLink { section_id: "skills", label: "Skills" },
    NavLink { section_id: "projects", label: "Projects" },
    NavLink { section_id: "contact", label: "Contact" },
];

//! In-page navigation state and the hero keyword rotation.

pub const SCROLLED_OFFSET_PX: f64 = 20.0;
/// Viewport width from which the desktop nav replaces the mobile menu.
pub const DESKTOP_MIN_WIDTH_PX: f64 = 768.0;

pub const ROTATING_WORDS: [&str; 4] = ["Scalable", "Performant", "Intelligent", "Beautiful"];
pub const KEYWORD_INTERVAL_MS: u64 = 2500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    #[default]
    Hero,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Hero,
        Anchor::Experience,
        Anchor::Projects,
        Anchor::Skills,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Hero => "hero",
            Anchor::Experience => "experience",
            Anchor::Projects => "projects",
            Anchor::Skills => "skills",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Anchor::Hero => "#hero",
            Anchor::Experience => "#experience",
            Anchor::Projects => "#projects",
            Anchor::Skills => "#skills",
            Anchor::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Hero => "Home",
            Anchor::Experience => "Experience",
            Anchor::Projects => "Projects",
            Anchor::Skills => "Skills",
            Anchor::Contact => "Contact",
        }
    }

    /// Accepts `#skills` as well as a bare `skills`.
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Anchor,
    pub scrolled: bool,
    pub mobile_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A nav link was clicked.
    pub fn select(&mut self, anchor: Anchor) {
        self.active = anchor;
        self.mobile_open = false;
    }

    pub fn is_active(&self, anchor: Anchor) -> bool {
        self.active == anchor
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLLED_OFFSET_PX;
    }

    pub fn on_resize(&mut self, inner_width: f64) {
        if inner_width >= DESKTOP_MIN_WIDTH_PX {
            self.mobile_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordCycle {
    index: usize,
}

impl KeywordCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        ROTATING_WORDS[self.index]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % ROTATING_WORDS.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_targets() {
        let hrefs = Anchor::ALL.map(Anchor::href);
        assert_eq!(
            hrefs,
            ["#hero", "#experience", "#projects", "#skills", "#contact"]
        );
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
            assert_eq!(Anchor::from_href(anchor.href()), Some(anchor));
            assert_eq!(Anchor::from_href(anchor.id()), Some(anchor));
        }
        assert_eq!(Anchor::from_href("#about"), None);
    }

    #[test]
    fn test_select_marks_only_clicked_link() {
        let mut nav = NavState::new();
        assert!(nav.is_active(Anchor::Hero));

        nav.select(Anchor::Projects);
        nav.select(Anchor::Skills);
        let active = Anchor::ALL
            .into_iter()
            .filter(|a| nav.is_active(*a))
            .collect::<Vec<_>>();
        assert_eq!(active, vec![Anchor::Skills]);
    }

    #[test]
    fn test_select_closes_mobile_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.mobile_open);
        nav.select(Anchor::Contact);
        assert!(!nav.mobile_open);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavState::new();
        nav.on_scroll(20.0);
        assert!(!nav.scrolled);
        nav.on_scroll(21.0);
        assert!(nav.scrolled);
        nav.on_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_resize_closes_menu_on_desktop() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.on_resize(500.0);
        assert!(nav.mobile_open);
        nav.on_resize(768.0);
        assert!(!nav.mobile_open);
    }

    #[test]
    fn test_keyword_cycle_wraps() {
        let mut cycle = KeywordCycle::new();
        assert_eq!(cycle.current(), "Scalable");
        let seen = (0..5).map(|_| cycle.advance()).collect::<Vec<_>>();
        assert_eq!(
            seen,
            ["Performant", "Intelligent", "Beautiful", "Scalable", "Performant"]
        );
    }
}

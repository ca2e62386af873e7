//! One-shot entrance animations for page sections.

/// Root margin used by every section: fire slightly before the section edge
/// reaches the viewport edge.
pub const DEFAULT_ROOT_MARGIN: &str = "-80px";

/// What the visibility observer reported for a section root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    /// The root intersects the (margin-adjusted) viewport with this ratio.
    Intersecting(f64),
    NotIntersecting,
    /// No observer exists in this environment.
    Unavailable,
    /// The section was mounted and plays its entrance without waiting for
    /// the viewport.
    Mounted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }

    /// Feeds one observation. Returns true only for the transition into
    /// `Revealed`; nothing moves the state back.
    pub fn observe(&mut self, observation: Observation, threshold: f64) -> bool {
        if self.is_revealed() {
            return false;
        }
        let fire = match observation {
            Observation::Intersecting(ratio) => ratio >= threshold,
            Observation::NotIntersecting => false,
            Observation::Unavailable => {
                log::debug!("visibility observer unavailable, revealing immediately");
                true
            }
            Observation::Mounted => true,
        };
        if fire {
            *self = Self::Revealed;
        }
        fire
    }
}

/// Per-child entrance delays, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub initial_delay: f64,
    pub increment: f64,
}

impl Stagger {
    pub const HERO: Stagger = Stagger::new(0.3, 0.15);
    pub const EXPERIENCE: Stagger = Stagger::new(0.2, 0.15);
    pub const PROJECTS: Stagger = Stagger::new(0.2, 0.1);
    pub const SKILLS: Stagger = Stagger::new(0.2, 0.1);
    pub const CONTACT: Stagger = Stagger::new(0.2, 0.12);

    pub const fn new(initial_delay: f64, increment: f64) -> Self {
        Self {
            initial_delay,
            increment,
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.initial_delay + index as f64 * self.increment
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub root_margin: String,
    /// Minimum visible ratio before the section counts as entered.
    pub threshold: f64,
    /// Only `true` is used on the site; sections never replay.
    pub once: bool,
    /// Reveal as soon as the section mounts instead of on first intersection.
    pub on_mount: bool,
    pub stagger: Stagger,
}

impl RevealConfig {
    pub fn new(stagger: Stagger) -> Self {
        Self {
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            threshold: 0.0,
            once: true,
            on_mount: false,
            stagger,
        }
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    /// Non-finite values are ignored and keep the current threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() {
            self.threshold = threshold.clamp(0.0, 1.0);
        } else {
            log::warn!("ignoring reveal threshold {threshold}");
        }
        self
    }

    pub fn on_mount(mut self) -> Self {
        self.on_mount = true;
        self
    }
}

/// How a single child moves into place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Vertical offset of the hidden state, in pixels.
    pub offset_px: f64,
    /// Duration of the entrance, in seconds.
    pub duration: f64,
}

impl RevealStyle {
    pub const FADE_UP: RevealStyle = RevealStyle::new(28.0, 0.6);
    pub const HERO_FADE_UP: RevealStyle = RevealStyle::new(24.0, 0.6);
    pub const CARD: RevealStyle = RevealStyle::new(24.0, 0.5);
    pub const TIMELINE_CARD: RevealStyle = RevealStyle::new(36.0, 0.65);

    pub const fn new(offset_px: f64, duration: f64) -> Self {
        Self {
            offset_px,
            duration,
        }
    }

    pub fn hidden_css(&self) -> String {
        format!(
            "opacity: 0; transform: translateY({}px); transition: none;",
            self.offset_px
        )
    }

    pub fn visible_css(&self, delay: f64) -> String {
        format!(
            "opacity: 1; transform: none; transition: opacity {d}s ease-out {delay:.2}s, transform {d}s ease-out {delay:.2}s;",
            d = self.duration
        )
    }

    /// Inline style for child `index` of a section in `state`.
    pub fn css(&self, state: RevealState, stagger: &Stagger, index: usize) -> String {
        match state {
            RevealState::Unrevealed => self.hidden_css(),
            RevealState::Revealed => self.visible_css(stagger.delay_for(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());

        assert!(state.observe(Observation::Intersecting(0.2), 0.0));
        assert!(state.is_revealed());

        // scrolling away and back never fires again
        assert!(!state.observe(Observation::NotIntersecting, 0.0));
        assert!(!state.observe(Observation::Intersecting(1.0), 0.0));
        assert!(!state.observe(Observation::Unavailable, 0.0));
        assert!(state.is_revealed());
    }

    #[test]
    fn test_never_intersecting_stays_hidden() {
        let mut state = RevealState::default();
        for _ in 0..100 {
            assert!(!state.observe(Observation::NotIntersecting, 0.0));
        }
        assert_eq!(state, RevealState::Unrevealed);

        let style = RevealStyle::FADE_UP;
        let css = style.css(state, &Stagger::SKILLS, 3);
        assert!(css.starts_with("opacity: 0"));
        assert!(css.contains("transition: none"));
    }

    #[test]
    fn test_unavailable_observer_reveals() {
        let mut state = RevealState::default();
        assert!(state.observe(Observation::Unavailable, 0.5));
        assert!(state.is_revealed());
    }

    #[test]
    fn test_threshold_gates_transition() {
        let mut state = RevealState::default();
        assert!(!state.observe(Observation::Intersecting(0.1), 0.25));
        assert!(state.observe(Observation::Intersecting(0.3), 0.25));

        let mut edge = RevealState::default();
        assert!(edge.observe(Observation::Intersecting(0.0), 0.0));
    }

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::new(0.2, 0.15);
        let delays = (0..6).map(|n| stagger.delay_for(n)).collect::<Vec<_>>();
        for (n, d) in delays.iter().enumerate() {
            assert!((d - (0.2 + n as f64 * 0.15)).abs() < 1e-12);
        }
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_visible_css_carries_delay() {
        let css = RevealStyle::CARD.css(RevealState::Revealed, &Stagger::CONTACT, 2);
        assert!(css.starts_with("opacity: 1; transform: none;"));
        assert!(css.contains("opacity 0.5s ease-out 0.44s"));
    }

    #[test]
    fn test_config_defaults() {
        let config = RevealConfig::new(Stagger::EXPERIENCE);
        assert_eq!(config.root_margin, "-80px");
        assert!(config.once);
        assert_eq!(config.threshold, 0.0);

        let config = config.root_margin("-40px").threshold(3.0);
        assert_eq!(config.root_margin, "-40px");
        assert_eq!(config.threshold, 1.0);
    }

    #[test]
    fn test_non_finite_threshold_keeps_previous() {
        let config = RevealConfig::new(Stagger::SKILLS)
            .threshold(0.25)
            .threshold(f64::NAN)
            .threshold(f64::INFINITY);
        assert_eq!(config.threshold, 0.25);

        let config = RevealConfig::new(Stagger::SKILLS).threshold(f64::NAN);
        let mut state = RevealState::default();
        assert!(state.observe(Observation::Intersecting(1.0), config.threshold));
    }

    #[test]
    fn test_mounted_reveals_without_viewport() {
        let config = RevealConfig::new(Stagger::HERO).on_mount();
        assert!(config.on_mount);
        assert!(!RevealConfig::new(Stagger::HERO).on_mount);

        let mut state = RevealState::default();
        assert!(state.observe(Observation::Mounted, 1.0));
        assert!(!state.observe(Observation::Mounted, 1.0));
        assert_eq!(
            RevealStyle::HERO_FADE_UP.css(state, &Stagger::HERO, 0),
            RevealStyle::HERO_FADE_UP.visible_css(0.3)
        );
    }
}

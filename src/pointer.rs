//! Cursor-tracking tilt and glow for content cards.
//!
//! A [`PointerState`] turns raw client coordinates over a card into a
//! normalized hover position plus a small 3D tilt. The browser side feeds it
//! `mousemove` samples and renders the result through a [`TiltSpring`].

/// Largest rotation applied on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 4.0;
/// CSS perspective used for the card transform, in pixels.
pub const PERSPECTIVE_PX: f64 = 800.0;

pub const SPRING_STIFFNESS: f64 = 300.0;
pub const SPRING_DAMPING: f64 = 20.0;

// Frames longer than this are integrated in several steps.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;
const SETTLE_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect we can divide by. Collapsed, negative or NaN sizes are not.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation around the horizontal axis (CSS `rotateX`).
    pub x: f64,
    /// Rotation around the vertical axis (CSS `rotateY`).
    pub y: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt { x: 0.0, y: 0.0 };

    /// Tilt for a hover position given in percent of the surface.
    pub fn from_position(x_percent: f64, y_percent: f64) -> Self {
        Self {
            x: ((y_percent - 50.0) / 50.0) * -MAX_TILT_DEG,
            y: ((x_percent - 50.0) / 50.0) * MAX_TILT_DEG,
        }
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::FLAT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Last sampled hover position as `(x_percent, y_percent)`.
    pub position: (f64, f64),
    pub tilt: Tilt,
    pub hovered: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: (50.0, 50.0),
            tilt: Tilt::FLAT,
            hovered: false,
        }
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// Applies one pointer sample. Returns false when `rect` cannot be
    /// measured, in which case the previous state is kept as is.
    pub fn track(&mut self, client_x: f64, client_y: f64, rect: SurfaceRect) -> bool {
        if !rect.is_measurable() {
            log::trace!("ignoring pointer sample over unmeasurable surface {rect:?}");
            return false;
        }
        let x = (((client_x - rect.left) / rect.width) * 100.0).clamp(0.0, 100.0);
        let y = (((client_y - rect.top) / rect.height) * 100.0).clamp(0.0, 100.0);
        self.position = (x, y);
        self.tilt = Tilt::from_position(x, y);
        self.hovered = true;
        true
    }

    /// Drops hover and flattens the card. The position stays at the last
    /// sample; nothing reads it while not hovered.
    pub fn leave(&mut self) {
        self.hovered = false;
        self.tilt = Tilt::FLAT;
    }

    pub fn transform_css(&self) -> String {
        transform_css(self.tilt)
    }

    /// Gradient border spotlight following the cursor.
    pub fn spotlight_css(&self) -> String {
        if !self.hovered {
            return "none".to_string();
        }
        let (x, y) = self.position;
        format!(
            "radial-gradient(600px circle at {x}% {y}%, rgba(99,102,241,0.12), rgba(139,92,246,0.06) 40%, transparent 70%)"
        )
    }

    /// Softer glow painted on the card surface itself.
    pub fn surface_glow_css(&self) -> String {
        if !self.hovered {
            return "none".to_string();
        }
        let (x, y) = self.position;
        format!("radial-gradient(400px circle at {x}% {y}%, rgba(99,102,241,0.06), transparent 60%)")
    }
}

pub fn transform_css(tilt: Tilt) -> String {
    format!(
        "perspective({PERSPECTIVE_PX}px) rotateX({:.3}deg) rotateY({:.3}deg)",
        tilt.x, tilt.y
    )
}

/// One-dimensional damped spring with unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING)
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }

    /// Advances the spring by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// The displayed tilt, chasing the target tilt of a [`PointerState`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltSpring {
    x: Spring,
    y: Spring,
}

impl TiltSpring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, tilt: Tilt) {
        self.x.set_target(tilt.x);
        self.y.set_target(tilt.y);
    }

    pub fn step(&mut self, dt: f64) -> Tilt {
        self.x.step(dt);
        self.y.step(dt);
        self.current()
    }

    pub fn current(&self) -> Tilt {
        Tilt {
            x: self.x.value(),
            y: self.y.value(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_quarter_point_of_wide_card() {
        let rect = SurfaceRect::new(120.0, 40.0, 400.0, 200.0);
        let mut state = PointerState::new();
        state.enter();
        assert!(state.track(120.0 + 100.0, 40.0 + 50.0, rect));

        assert!(approx(state.position.0, 25.0));
        assert!(approx(state.position.1, 25.0));
        assert!(approx(state.tilt.x, 2.0));
        assert!(approx(state.tilt.y, -2.0));
        assert!(state.hovered);
    }

    #[test]
    fn test_center_is_flat() {
        let rect = SurfaceRect::new(0.0, 0.0, 300.0, 150.0);
        let mut state = PointerState::new();
        state.track(150.0, 75.0, rect);
        assert!(approx(state.tilt.x, 0.0));
        assert!(approx(state.tilt.y, 0.0));
    }

    #[test]
    fn test_samples_stay_in_bounds() {
        let rect = SurfaceRect::new(10.0, 20.0, 250.0, 90.0);
        let mut state = PointerState::new();
        for i in 1..50 {
            for j in 1..50 {
                let x = rect.left + rect.width * (i as f64 / 50.0);
                let y = rect.top + rect.height * (j as f64 / 50.0);
                state.track(x, y, rect);
                let (px, py) = state.position;
                assert!((0.0..=100.0).contains(&px));
                assert!((0.0..=100.0).contains(&py));
                assert!((-MAX_TILT_DEG..=MAX_TILT_DEG).contains(&state.tilt.x));
                assert!((-MAX_TILT_DEG..=MAX_TILT_DEG).contains(&state.tilt.y));
            }
        }
    }

    #[test]
    fn test_outside_samples_are_clamped() {
        let rect = SurfaceRect::new(0.0, 0.0, 100.0, 100.0);
        let mut state = PointerState::new();
        state.track(-40.0, 500.0, rect);
        assert_eq!(state.position, (0.0, 100.0));
        assert!(approx(state.tilt.x, -4.0));
        assert!(approx(state.tilt.y, -4.0));
    }

    #[test]
    fn test_zero_size_keeps_previous_state() {
        let mut state = PointerState::new();
        state.track(30.0, 30.0, SurfaceRect::new(0.0, 0.0, 100.0, 100.0));
        let before = state;

        assert!(!state.track(5.0, 5.0, SurfaceRect::new(0.0, 0.0, 0.0, 100.0)));
        assert!(!state.track(5.0, 5.0, SurfaceRect::new(0.0, 0.0, 100.0, 0.0)));
        assert!(!state.track(5.0, 5.0, SurfaceRect::new(0.0, 0.0, f64::NAN, 10.0)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_leave_resets_tilt_and_hover() {
        let rect = SurfaceRect::new(0.0, 0.0, 200.0, 200.0);
        let mut state = PointerState::new();
        state.enter();
        state.track(190.0, 10.0, rect);
        state.leave();

        assert!(!state.hovered);
        assert_eq!(state.tilt, Tilt::FLAT);
        assert!(approx(state.position.0, 95.0));
        assert_eq!(state.spotlight_css(), "none");
        assert_eq!(state.surface_glow_css(), "none");
    }

    #[test]
    fn test_rapid_enter_leave_ends_unhovered() {
        let rect = SurfaceRect::new(0.0, 0.0, 80.0, 80.0);
        let mut state = PointerState::new();
        for _ in 0..20 {
            state.enter();
            state.track(60.0, 20.0, rect);
            state.leave();
        }
        assert!(!state.hovered);
        assert_eq!(state.tilt, Tilt::FLAT);
    }

    #[test]
    fn test_cards_track_independently() {
        let rect = SurfaceRect::new(0.0, 0.0, 100.0, 100.0);
        let mut a = PointerState::new();
        let b = PointerState::new();
        a.enter();
        a.track(0.0, 0.0, rect);
        assert!(a.hovered);
        assert!(!b.hovered);
        assert_eq!(b.tilt, Tilt::FLAT);
    }

    #[test]
    fn test_glow_follows_position() {
        let mut state = PointerState::new();
        state.enter();
        state.track(25.0, 75.0, SurfaceRect::new(0.0, 0.0, 100.0, 100.0));
        assert!(state.spotlight_css().contains("at 25% 75%"));
        assert!(state.surface_glow_css().starts_with("radial-gradient(400px"));
    }

    #[test]
    fn test_transform_css() {
        let css = transform_css(Tilt { x: 2.0, y: -1.5 });
        assert_eq!(css, "perspective(800px) rotateX(2.000deg) rotateY(-1.500deg)");
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::default();
        spring.set_target(4.0);
        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 4.0);
    }

    #[test]
    fn test_spring_ignores_bad_deltas() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        spring.step(0.0);
        spring.step(-1.0);
        spring.step(f64::NAN);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_tilt_spring_returns_to_flat() {
        let mut spring = TiltSpring::new();
        spring.set_target(Tilt { x: 3.0, y: -3.0 });
        spring.step(0.05);
        let mid = spring.current();
        assert!(mid.x > 0.0 && mid.y < 0.0);

        spring.set_target(Tilt::FLAT);
        // one long frame is sub-stepped rather than exploding
        let end = spring.step(5.0);
        assert_eq!(end, Tilt::FLAT);
        assert!(spring.is_settled());
    }
}

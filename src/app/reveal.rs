use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::{
    reveal::{Observation, RevealConfig, RevealState, RevealStyle, Stagger},
    theme::Theme,
};

/// Watches `target` and flips to [`RevealState::Revealed`] the first time it
/// enters the viewport, or right after mounting when `config.on_mount` is set. The observer is disconnected once that happens and
/// on unmount.
pub fn use_reveal(target: NodeRef<html::Section>, config: RevealConfig) -> Signal<RevealState> {
    let (state, set_state) = signal(RevealState::default());
    let RevealConfig {
        root_margin,
        threshold,
        once,
        on_mount,
        ..
    } = config;

    let feed = move |observation: Observation| {
        let mut next = state.get_untracked();
        if next.observe(observation, threshold) {
            log::debug!("section revealed after {observation:?}");
            set_state.set(next);
        }
    };

    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let observation = if entry.is_intersecting() {
                    Observation::Intersecting(entry.intersection_ratio())
                } else {
                    Observation::NotIntersecting
                };
                feed(observation);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(root_margin)
            .thresholds(vec![threshold]),
    );

    // effects only run in the browser, so the server keeps the hidden style
    Effect::new(move |_| {
        if on_mount {
            feed(Observation::Mounted);
        } else if !is_supported.get() {
            feed(Observation::Unavailable);
        }
    });

    Effect::watch(
        move || state.get(),
        move |state, _, _| {
            if once && state.is_revealed() {
                stop();
            }
        },
        false,
    );

    state.into()
}

/// Inline style for the `index`th animated child of a section. The minimal
/// variant never hides anything.
pub fn staggered(
    theme: RwSignal<Theme>,
    state: Signal<RevealState>,
    style: RevealStyle,
    stagger: Stagger,
    index: usize,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || {
        if theme.get().animates() {
            style.css(state.get(), &stagger, index)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_for(theme: Theme, state: RevealState, index: usize) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let theme = RwSignal::new(theme);
            let state = RwSignal::new(state);
            let css = staggered(
                theme,
                state.into(),
                RevealStyle::CARD,
                Stagger::PROJECTS,
                index,
            );
            css()
        })
    }

    #[test]
    fn test_minimal_never_hides() {
        for state in [RevealState::Unrevealed, RevealState::Revealed] {
            assert_eq!(style_for(Theme::Minimal, state, 2), "");
        }
    }

    #[test]
    fn test_animated_hidden_until_revealed() {
        let hidden = style_for(Theme::Animated, RevealState::Unrevealed, 2);
        assert_eq!(hidden, RevealStyle::CARD.hidden_css());

        let shown = style_for(Theme::Animated, RevealState::Revealed, 2);
        assert_eq!(shown, RevealStyle::CARD.visible_css(0.4));
    }

    #[test]
    fn test_style_follows_signals() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = RwSignal::new(Theme::Animated);
            let state = RwSignal::new(RevealState::Unrevealed);
            let css = staggered(theme, state.into(), RevealStyle::FADE_UP, Stagger::SKILLS, 0);
            assert!(css().starts_with("opacity: 0"));

            state.set(RevealState::Revealed);
            assert!(css().starts_with("opacity: 1"));

            theme.set(Theme::Minimal);
            assert_eq!(css(), "");
        });
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation variant shared by every section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode, static layout, no pointer or scroll effects.
    Minimal,
    /// Dark mode with tilt/glow cards and staggered reveals.
    #[default]
    Animated,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" | "light" => Ok(Self::Minimal),
            "animated" | "dark" => Ok(Self::Animated),
            _ => Err(ThemeError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minimal => "minimal",
            Self::Animated => "animated",
        })
    }
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Minimal => Self::Animated,
            Self::Animated => Self::Minimal,
        }
    }

    /// Whether cards tilt and sections play their entrance.
    pub fn animates(self) -> bool {
        self == Self::Animated
    }

    /// Experience metrics are only part of the animated configuration.
    pub fn show_metrics(self) -> bool {
        self == Self::Animated
    }

    pub fn color_scheme(self) -> &'static str {
        match self {
            Self::Minimal => "light",
            Self::Animated => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Minimal => &MINIMAL,
            Self::Animated => &ANIMATED,
        }
    }
}

/// Class strings a section needs to render in one variant.
#[derive(Debug)]
pub struct Palette {
    pub page: &'static str,
    pub section: &'static str,
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub card: &'static str,
    pub chip: &'static str,
    pub tag: &'static str,
    pub link: &'static str,
    pub button: &'static str,
    pub button_secondary: &'static str,
    pub nav: &'static str,
    pub nav_scrolled: &'static str,
    pub nav_link: &'static str,
    pub nav_link_active: &'static str,
    pub image_box: &'static str,
    pub footer: &'static str,
}

static MINIMAL: Palette = Palette {
    page: "bg-white text-zinc-900",
    section: "w-full bg-white px-6 py-20 sm:px-12 lg:px-24",
    eyebrow: "text-sm font-medium uppercase tracking-wide text-zinc-500",
    heading: "text-3xl font-bold tracking-tight text-zinc-900 sm:text-4xl",
    accent: "text-zinc-900",
    body: "text-base leading-relaxed text-zinc-600",
    muted: "text-xs text-zinc-500",
    card: "group relative flex flex-col overflow-hidden rounded-xl border border-zinc-200 bg-zinc-50 transition-shadow hover:shadow-md",
    chip: "rounded-full bg-zinc-100 px-2.5 py-0.5 text-xs font-medium text-zinc-600",
    tag: "rounded border border-zinc-200 bg-white px-2 py-1 text-xs font-medium text-zinc-700",
    link: "inline-flex items-center gap-1.5 text-sm font-medium text-zinc-700 transition-colors hover:text-zinc-900",
    button: "inline-flex h-12 items-center justify-center gap-2 rounded-lg bg-zinc-900 px-8 text-sm font-semibold text-white hover:bg-zinc-700",
    button_secondary: "inline-flex h-12 items-center justify-center rounded-lg border border-zinc-300 px-8 text-sm font-semibold text-zinc-700 hover:bg-zinc-100",
    nav: "fixed top-0 z-50 w-full bg-white/90 transition-all duration-500",
    nav_scrolled: "fixed top-0 z-50 w-full bg-white shadow-sm transition-all duration-500",
    nav_link: "px-3 py-2 text-sm font-medium text-zinc-500 hover:text-zinc-900",
    nav_link_active: "px-3 py-2 text-sm font-medium text-zinc-900 underline underline-offset-8",
    image_box: "relative aspect-video w-full overflow-hidden bg-zinc-200",
    footer: "w-full border-t border-zinc-200 bg-white px-6 py-10 sm:px-12 lg:px-24",
};

static ANIMATED: Palette = Palette {
    page: "bg-[#0b0b0f] text-white",
    section: "relative w-full overflow-hidden px-6 py-20 sm:px-12 lg:px-24",
    eyebrow: "inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/[0.03] px-4 py-1.5 font-mono text-xs font-medium tracking-wide text-indigo-300",
    heading: "mt-6 text-3xl font-bold tracking-tight text-white sm:text-4xl lg:text-5xl",
    accent: "gradient-text",
    body: "text-base leading-relaxed text-gray-400 sm:text-lg",
    muted: "text-xs text-gray-500",
    card: "group relative overflow-hidden rounded-2xl border border-white/[0.08] bg-white/[0.02] backdrop-blur-xl transition-[border-color,box-shadow] duration-300 hover:border-white/[0.15] hover:shadow-lg hover:shadow-indigo-500/[0.04]",
    chip: "rounded-lg border border-white/[0.06] bg-white/[0.03] px-3 py-1.5 text-xs font-medium text-gray-400 transition-colors hover:border-white/12 hover:text-gray-200",
    tag: "rounded-md border border-white/[0.06] bg-white/[0.03] px-2.5 py-1 text-xs font-medium text-gray-400 transition-colors hover:border-white/10 hover:text-gray-300",
    link: "inline-flex items-center gap-1.5 text-sm font-medium text-gray-300 transition-colors hover:text-white",
    button: "btn-glow inline-flex h-12 items-center justify-center gap-2 rounded-xl bg-gradient-to-r from-indigo-500 via-violet-500 to-indigo-600 px-8 text-sm font-semibold text-white shadow-lg shadow-indigo-500/20 transition-transform hover:scale-[1.03] active:scale-[0.97]",
    button_secondary: "inline-flex h-12 items-center justify-center rounded-xl border border-white/10 bg-white/[0.03] px-8 text-sm font-semibold text-gray-300 transition-all hover:border-white/20 hover:bg-white/[0.06] hover:text-white",
    nav: "fixed top-0 z-50 w-full bg-transparent transition-all duration-500",
    nav_scrolled: "fixed top-0 z-50 w-full glass shadow-lg shadow-black/20 transition-all duration-500",
    nav_link: "relative px-3 py-2 text-sm font-medium text-gray-400 transition-colors hover:text-white",
    nav_link_active: "relative px-3 py-2 text-sm font-medium text-white nav-underline",
    image_box: "relative aspect-video w-full overflow-hidden bg-zinc-800",
    footer: "relative w-full border-t border-white/[0.06] bg-[#08080c] px-6 py-10 sm:px-12 lg:px-24",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("minimal".parse::<Theme>(), Ok(Theme::Minimal));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Minimal));
        assert_eq!("ANIMATED".parse::<Theme>(), Ok(Theme::Animated));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Animated));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::Unknown("sepia".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for theme in [Theme::Minimal, Theme::Animated] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_only_animated_variant_moves() {
        assert!(Theme::Animated.animates());
        assert!(!Theme::Minimal.animates());
        assert!(Theme::Animated.show_metrics());
        assert!(!Theme::Minimal.show_metrics());
        assert_eq!(Theme::default(), Theme::Animated);
        assert_eq!(Theme::Minimal.toggled(), Theme::Animated);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Theme::Minimal).unwrap();
        assert_eq!(json, "\"minimal\"");
        let theme: Theme = serde_json::from_str("\"animated\"").unwrap();
        assert_eq!(theme, Theme::Animated);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Minimal.palette().card, Theme::Animated.palette().card);
        assert_eq!(Theme::Minimal.color_scheme(), "light");
    }
}

mod contact;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use leptos::{html, prelude::*};

use crate::content::Icon;

use super::use_theme;

/// Inline stroke icon sized to the surrounding font.
#[component]
pub(super) fn Glyph(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            viewBox=Icon::VIEW_BOX
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("inline-block h-[1em] w-[1em] shrink-0 {class}")
            aria-hidden="true"
        >
            <path d=icon.path() />
        </svg>
    }
}

/// Eyebrow badge, headline and blurb opening each content section.
#[component]
fn SectionHeader(
    icon: Icon,
    eyebrow: &'static str,
    title: &'static str,
    accent: &'static str,
    blurb: &'static str,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    view! {
        <div class=if centered { "text-center" } else { "" }>
            <span class=move || palette().eyebrow>
                <Glyph icon class="text-xs" />
                {eyebrow}
            </span>
            <h2 class=move || palette().heading>
                {title} " " <span class=move || palette().accent>{accent}</span>
            </h2>
            <p class=move || {
                format!(
                    "mt-4 max-w-2xl {} {}",
                    palette().body,
                    if centered { "mx-auto" } else { "" },
                )
            }>{blurb}</p>
        </div>
    }
}

#[component]
fn Chips(#[prop(into)] items: Vec<&'static str>, #[prop(optional)] tags: bool) -> impl IntoView {
    let theme = use_theme();
    let class = move || {
        let palette = theme.get().palette();
        if tags {
            palette.tag
        } else {
            palette.chip
        }
    };
    view! {
        <div class="flex flex-wrap gap-2">
            {items.into_iter().map(|item| view! { <span class=class>{item}</span> }).collect_view()}
        </div>
    }
}

/// Whether the `<img>` of an [`ImageFrame`] should still be drawn. The frame
/// and its placeholder glyph are always drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ImageLoad {
    #[default]
    Pending,
    Failed,
}

impl ImageLoad {
    /// A load that finished before hydration leaves `complete` set with no
    /// intrinsic width when it failed; the `error` event has already fired.
    fn from_mount(complete: bool, natural_width: u32) -> Self {
        if complete && natural_width == 0 {
            Self::Failed
        } else {
            Self::Pending
        }
    }

    fn fail(&mut self) {
        *self = Self::Failed;
    }

    fn shows_image(self) -> bool {
        self != Self::Failed
    }
}

/// Image area that keeps its box and a placeholder glyph when the image is
/// missing.
#[component]
fn ImageFrame(
    src: &'static str,
    alt: &'static str,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let theme = use_theme();
    let load = RwSignal::new(ImageLoad::default());
    let img_ref = NodeRef::<html::Img>::new();

    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if ImageLoad::from_mount(img.complete(), img.natural_width()) == ImageLoad::Failed {
                log::debug!("image failed before hydration: {src}");
                load.update(ImageLoad::fail);
            }
        }
    });

    view! {
        <div class=move || format!("{} {class}", theme.get().palette().image_box)>
            <div class="absolute inset-0 flex items-center justify-center text-zinc-400">
                <Glyph icon=Icon::Image class="text-5xl" />
            </div>
            <Show when=move || load.get().shows_image()>
                <img
                    node_ref=img_ref
                    src=src
                    alt=alt
                    loading="lazy"
                    class="absolute inset-0 h-full w-full object-cover transition-transform duration-300 group-hover:scale-105"
                    on:error=move |_| {
                        log::debug!("image missing: {src}");
                        load.update(ImageLoad::fail);
                    }
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_hides_only_the_image() {
        let mut load = ImageLoad::default();
        assert!(load.shows_image());

        load.fail();
        assert!(!load.shows_image());
        load.fail();
        assert_eq!(load, ImageLoad::Failed);
    }

    #[test]
    fn test_load_state_on_mount() {
        // still loading
        assert_eq!(ImageLoad::from_mount(false, 0), ImageLoad::Pending);
        // loaded fine
        assert_eq!(ImageLoad::from_mount(true, 640), ImageLoad::Pending);
        // broken before the error handler was attached
        assert_eq!(ImageLoad::from_mount(true, 0), ImageLoad::Failed);
    }
}

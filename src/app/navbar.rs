use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    content::{Icon, PROFILE},
    nav::{Anchor, NavState},
};

use super::{sections::Glyph, use_theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let nav = RwSignal::new(NavState::new());

    // only write when something changed, scroll fires on every frame
    let apply = move |f: &dyn Fn(&mut NavState)| {
        let current = nav.get_untracked();
        let mut next = current;
        f(&mut next);
        if next != current {
            nav.set(next);
        }
    };

    // listeners are removed when the navbar is unmounted
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        apply(&|n: &mut NavState| n.on_scroll(y));
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        apply(&|n: &mut NavState| n.on_resize(width));
    });

    // a deep link like `/#projects` starts with that link active
    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(anchor) = Anchor::from_href(&hash) {
            apply(&|n: &mut NavState| n.select(anchor));
        }
    });

    let link_class = move |anchor: Anchor| {
        move || {
            if nav.with(|n| n.is_active(anchor)) {
                palette().nav_link_active
            } else {
                palette().nav_link
            }
        }
    };

    view! {
        <header class=move || {
            if nav.with(|n| n.scrolled) { palette().nav_scrolled } else { palette().nav }
        }>
            <nav class="mx-auto flex h-16 max-w-7xl items-center justify-between px-6 lg:px-8">
                <a
                    href=Anchor::Hero.href()
                    class="relative text-xl font-bold tracking-tight"
                    on:click=move |_| apply(&|n: &mut NavState| n.select(Anchor::Hero))
                >
                    <span class=move || palette().accent>{PROFILE.name}</span>
                    <span class="opacity-60">"."</span>
                </a>

                <div class="hidden items-center gap-1 md:flex">
                    {Anchor::ALL
                        .into_iter()
                        .map(|anchor| {
                            view! {
                                <a
                                    href=anchor.href()
                                    class=link_class(anchor)
                                    aria-current=move || {
                                        nav.with(|n| n.is_active(anchor)).then_some("true")
                                    }
                                    on:click=move |_| apply(&|n: &mut NavState| n.select(anchor))
                                >
                                    {anchor.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=PROFILE.resume_path
                        download=""
                        class=move || format!("ml-4 h-9 px-5 {}", palette().button)
                    >
                        "Resume"
                    </a>
                    <ThemeToggle />
                </div>

                <button
                    class="relative flex h-10 w-10 items-center justify-center rounded-lg md:hidden"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.with(|n| n.mobile_open).to_string()
                    on:click=move |_| apply(&NavState::toggle_menu)
                >
                    <span class=move || {
                        if nav.with(|n| n.mobile_open) { "hamburger open" } else { "hamburger" }
                    } />
                </button>
            </nav>

            <Show when=move || nav.with(|n| n.mobile_open)>
                <div class="fixed inset-0 top-16 z-40 flex flex-col gap-1 px-6 pt-8 backdrop-blur-xl md:hidden">
                    {Anchor::ALL
                        .into_iter()
                        .map(|anchor| {
                            view! {
                                <a
                                    href=anchor.href()
                                    class=link_class(anchor)
                                    on:click=move |_| apply(&|n: &mut NavState| n.select(anchor))
                                >
                                    {anchor.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=PROFILE.resume_path
                        download=""
                        class=move || format!("mt-4 {}", palette().button)
                        on:click=move |_| apply(&|n: &mut NavState| n.mobile_open = false)
                    >
                        <Glyph icon=Icon::Download />
                        "Download Resume"
                    </a>
                    <ThemeToggle />
                </div>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="ml-2 rounded-lg px-3 py-2 text-sm font-medium opacity-70 hover:opacity-100"
            aria-label="Switch presentation"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || if theme.get().animates() { "Light" } else { "Dark" }}
        </button>
    }
}

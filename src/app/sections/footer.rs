use leptos::prelude::*;

use crate::{
    content::{Icon, PROFILE},
    nav::Anchor,
};

use super::{super::use_theme, Glyph};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let social = [
        ("GitHub", PROFILE.github, Icon::GitHub),
        ("LinkedIn", PROFILE.linkedin, Icon::LinkedIn),
    ];

    view! {
        <footer class=move || palette().footer>
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-6 sm:flex-row">
                <div class="flex flex-col items-center gap-1 sm:items-start">
                    <a href=Anchor::Hero.href() class="text-lg font-bold tracking-tight">
                        <span class=move || palette().accent>{PROFILE.name}</span>
                        <span class="opacity-40">"."</span>
                    </a>
                    <p class=move || palette().muted>"© " {BUILD_YEAR} " All rights reserved."</p>
                </div>
                <nav class="flex flex-wrap justify-center gap-6">
                    {Anchor::ALL
                        .into_iter()
                        .map(|anchor| {
                            view! {
                                <a href=anchor.href() class=move || palette().nav_link>
                                    {anchor.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-3">
                    {social
                        .into_iter()
                        .map(|(label, href, icon)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=label
                                    class="flex h-8 w-8 items-center justify-center rounded-lg border border-current/10 opacity-60 transition-opacity hover:opacity-100"
                                >
                                    <Glyph icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

use leptos::{html, prelude::*};

use crate::{
    content::{ExperienceEntry, Icon, EXPERIENCES},
    nav::Anchor,
    reveal::{RevealConfig, RevealStyle, Stagger},
};

use super::{
    super::{
        interactive_card::InteractiveCard,
        reveal::{staggered, use_reveal},
        use_theme,
    },
    Chips, Glyph, SectionHeader,
};

#[component]
pub fn Experience() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::new(Stagger::EXPERIENCE));

    view! {
        <section
            id=Anchor::Experience.id()
            node_ref=section_ref
            aria-label="Work Experience"
            class=move || theme.get().palette().section
        >
            <div class="mx-auto max-w-7xl">
                <div style=staggered(theme, revealed, RevealStyle::FADE_UP, Stagger::EXPERIENCE, 0)>
                    <SectionHeader
                        icon=Icon::Briefcase
                        eyebrow="Experience"
                        title="Building real-world systems"
                        accent="that scale"
                        blurb="Production-grade engineering across frontend, backend, and cloud, focused on ownership, impact, and shipping systems that matter."
                    />
                </div>
                <div class="relative mt-16">
                    <div class="absolute left-4 top-0 hidden h-full w-px sm:block">
                        <div class="h-full w-full bg-gradient-to-b from-indigo-500/30 via-violet-500/20 to-transparent" />
                    </div>
                    <div class="flex flex-col gap-12">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                view! {
                                    <div
                                        class="relative flex gap-8 sm:pl-12"
                                        style=staggered(
                                            theme,
                                            revealed,
                                            RevealStyle::TIMELINE_CARD,
                                            Stagger::EXPERIENCE,
                                            i + 1,
                                        )
                                    >
                                        <div class="absolute left-2.5 top-3 z-10 hidden sm:block">
                                            <div class="h-2 w-2 rounded-full border-2 border-indigo-400" />
                                        </div>
                                        <TimelineCard entry=*entry />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(entry: ExperienceEntry) -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let card = entry.card();
    view! {
        <InteractiveCard class="w-full p-6 sm:p-8">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-start sm:justify-between">
                <div>
                    <h3 class="text-xl font-bold sm:text-2xl">{card.title}</h3>
                    <p class="mt-1 text-base font-medium text-indigo-400">{entry.role}</p>
                </div>
                <div class="flex flex-col items-start gap-1.5 sm:items-end">
                    <span class=move || palette().muted>{entry.duration}</span>
                    {entry
                        .badge
                        .map(|badge| {
                            view! {
                                <span class="inline-flex rounded-full border border-indigo-500/20 bg-indigo-500/10 px-3 py-0.5 text-xs font-medium text-indigo-400">
                                    {badge}
                                </span>
                            }
                        })}
                </div>
            </div>
            <p class=move || format!("mt-5 {}", palette().body)>{card.description}</p>
            <ul class="mt-6 space-y-3">
                {entry
                    .highlights
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-start gap-3">
                                <span class="mt-2 h-1.5 w-1.5 shrink-0 rounded-full bg-indigo-400/60" />
                                <span class="text-sm leading-relaxed">{*item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show when=move || theme.get().show_metrics() && !entry.metrics.is_empty()>
                <div class="mt-6 flex flex-wrap gap-3">
                    {entry
                        .metrics
                        .iter()
                        .map(|metric| {
                            view! {
                                <span class=move || palette().chip>
                                    <Glyph icon=Icon::TrendingUp class="mr-1.5 text-indigo-400" />
                                    {*metric}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
            <div class="my-6 h-px bg-gradient-to-r from-white/[0.06] via-white/[0.03] to-transparent" />
            <Chips items=card.tags tags=true />
        </InteractiveCard>
    }
}

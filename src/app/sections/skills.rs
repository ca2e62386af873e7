use leptos::{html, prelude::*};

use crate::{
    content::{Icon, SKILL_CATEGORIES},
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
pub fn Skills() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::new(Stagger::SKILLS));

    view! {
        <section
            id=Anchor::Skills.id()
            node_ref=section_ref
            aria-label="Technical Skills"
            class=move || theme.get().palette().section
        >
            <div class="mx-auto max-w-7xl">
                <div style=staggered(theme, revealed, RevealStyle::FADE_UP, Stagger::SKILLS, 0)>
                    <SectionHeader
                        icon=Icon::Zap
                        eyebrow="Tech Stack"
                        title="Technologies I"
                        accent="work with"
                        blurb="A focused toolkit for building production-grade, full-stack applications, from pixel-perfect UIs to scalable cloud backends."
                    />
                </div>
                <div class="mt-16 grid gap-6 sm:grid-cols-2">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let card = category.card();
                            view! {
                                <div style=staggered(
                                    theme,
                                    revealed,
                                    RevealStyle::CARD,
                                    Stagger::SKILLS,
                                    i + 1,
                                )>
                                    <InteractiveCard class="p-6 sm:p-8">
                                        <div class="flex items-center gap-3">
                                            <div class="flex h-10 w-10 items-center justify-center rounded-lg border border-current/10">
                                                <Glyph icon=category.icon class=category.tint />
                                            </div>
                                            <h3 class="text-base font-bold">{card.title}</h3>
                                        </div>
                                        <div class="mt-5">
                                            <Chips items=card.tags />
                                        </div>
                                    </InteractiveCard>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

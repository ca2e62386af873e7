use leptos::{html, prelude::*};

use crate::{
    content::{Icon, CONTACT_LINKS, PROFILE},
    nav::Anchor,
    reveal::{RevealConfig, RevealStyle, Stagger},
};

use super::{
    super::{
        interactive_card::InteractiveCard,
        reveal::{staggered, use_reveal},
        use_theme,
    },
    Glyph, SectionHeader,
};

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::new(Stagger::CONTACT));
    // the call to action comes after every card
    let cta_index = CONTACT_LINKS.len() + 1;

    view! {
        <section
            id=Anchor::Contact.id()
            node_ref=section_ref
            aria-label="Contact Information"
            class=move || palette().section
        >
            <div class="mx-auto max-w-7xl">
                <div style=staggered(theme, revealed, RevealStyle::FADE_UP, Stagger::CONTACT, 0)>
                    <SectionHeader
                        icon=Icon::Send
                        eyebrow="Get in Touch"
                        title="Let's build"
                        accent="something together"
                        blurb="Interested in full-stack roles where I can work on real-world systems and challenging problems. Always open to great opportunities."
                        centered=true
                    />
                </div>
                <div class="mx-auto mt-16 grid max-w-3xl gap-4 sm:grid-cols-3">
                    {CONTACT_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let card = link.card();
                            let (href, external) = card
                                .links
                                .first()
                                .map(|l| (l.href, l.external))
                                .unwrap_or((link.href, link.is_external()));
                            view! {
                                <div style=staggered(
                                    theme,
                                    revealed,
                                    RevealStyle::CARD,
                                    Stagger::CONTACT,
                                    i + 1,
                                )>
                                    <InteractiveCard
                                        href=href
                                        external
                                        class="flex flex-col items-center gap-3 px-6 py-8 text-center"
                                    >
                                        <div class="flex h-12 w-12 items-center justify-center rounded-xl border border-current/10">
                                            <Glyph icon=link.icon class="text-xl" />
                                        </div>
                                        <h3 class="text-sm font-bold">{card.title}</h3>
                                        <p class=move || palette().muted>{card.description}</p>
                                    </InteractiveCard>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    class="mt-12 flex justify-center"
                    style=staggered(theme, revealed, RevealStyle::FADE_UP, Stagger::CONTACT, cta_index)
                >
                    <a href=PROFILE.mailto() class=move || palette().button>
                        "Say Hello"
                        <Glyph icon=Icon::ArrowRight />
                    </a>
                </div>
            </div>
        </section>
    }
}

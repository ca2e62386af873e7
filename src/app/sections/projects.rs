use leptos::{html, prelude::*};

use crate::{
    content::{Icon, Project, PROJECTS},
    nav::Anchor,
    reveal::{RevealConfig, RevealStyle, Stagger},
};

use super::{
    super::{
        interactive_card::InteractiveCard,
        reveal::{staggered, use_reveal},
        use_theme,
    },
    Chips, Glyph, ImageFrame, SectionHeader,
};

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::new(Stagger::PROJECTS));

    view! {
        <section
            id=Anchor::Projects.id()
            node_ref=section_ref
            aria-label="Personal Projects"
            class=move || theme.get().palette().section
        >
            <div class="mx-auto max-w-5xl">
                <div style=staggered(theme, revealed, RevealStyle::FADE_UP, Stagger::PROJECTS, 0)>
                    <SectionHeader
                        icon=Icon::Zap
                        eyebrow="Projects"
                        title="Independent work,"
                        accent="end to end"
                        blurb="A selection of independent projects that demonstrate my ability to design, build, and deliver complete systems."
                    />
                </div>
                <div class="mt-12 grid gap-8 sm:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div style=staggered(
                                    theme,
                                    revealed,
                                    RevealStyle::CARD,
                                    Stagger::PROJECTS,
                                    i + 1,
                                )>
                                    <ProjectCard project=*project />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let card = project.card();
    view! {
        <InteractiveCard class="flex h-full flex-col">
            <ImageFrame src=project.image alt=card.title />
            <div class="flex flex-1 flex-col p-5">
                <h3 class="text-lg font-semibold">{card.title}</h3>
                {card
                    .description
                    .map(|description| {
                        view! {
                            <p class=move || {
                                format!("mt-2 text-sm {}", palette().body)
                            }>{description}</p>
                        }
                    })}
                <div class="mt-3">
                    <Chips items=project.highlights />
                </div>
                {project
                    .role
                    .map(|role| {
                        view! {
                            <p class=move || format!("mt-3 italic {}", palette().muted)>{role}</p>
                        }
                    })}
                <div class="mt-4">
                    <Chips items=card.tags tags=true />
                </div>
                <div class="mt-auto flex gap-3 pt-5">
                    {card
                        .links
                        .into_iter()
                        .map(|link| {
                            let icon = if link.label == "GitHub" {
                                Icon::GitHub
                            } else {
                                Icon::ExternalLink
                            };
                            view! {
                                <a
                                    href=link.href
                                    target=link.external.then_some("_blank")
                                    rel=link.external.then_some("noopener noreferrer")
                                    class=move || palette().link
                                >
                                    <Glyph icon />
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </InteractiveCard>
    }
}

use leptos::{html, prelude::*};
use leptos_use::use_interval_fn;

use crate::{
    content::{Icon, HERO_NODES, HERO_STATS, PROFILE},
    nav::{Anchor, KeywordCycle, KEYWORD_INTERVAL_MS},
    reveal::{RevealConfig, RevealStyle, Stagger},
};

use super::{
    super::{
        reveal::{staggered, use_reveal},
        use_theme,
    },
    Glyph, ImageFrame,
};

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, RevealConfig::new(Stagger::HERO).on_mount());
    let step = move |i| staggered(theme, revealed, RevealStyle::HERO_FADE_UP, Stagger::HERO, i);

    let keyword = RwSignal::new(KeywordCycle::new());
    // cleared by leptos-use when the hero is unmounted
    let _ = use_interval_fn(
        move || {
            keyword.update(|k| {
                k.advance();
            })
        },
        KEYWORD_INTERVAL_MS,
    );

    view! {
        <section
            id=Anchor::Hero.id()
            node_ref=section_ref
            aria-label="Introduction"
            class="relative flex min-h-screen w-full items-center justify-center overflow-hidden px-6 sm:px-12 lg:px-24"
        >
            <Show when=move || theme.get().animates()>
                <div class="pointer-events-none absolute inset-0 -z-10">
                    <div class="absolute inset-0 bg-[radial-gradient(ellipse_80%_50%_at_50%_-20%,rgba(99,102,241,0.15),transparent)]" />
                    <div class="animate-blob absolute -top-40 left-1/4 h-[500px] w-[500px] rounded-full bg-indigo-600/20 blur-[120px]" />
                    <div class="animate-blob-reverse absolute -bottom-40 right-1/4 h-[400px] w-[400px] rounded-full bg-violet-600/15 blur-[120px]" />
                    <div class="animate-blob absolute right-1/3 top-1/3 h-[300px] w-[300px] rounded-full bg-cyan-500/10 blur-[100px]" />
                </div>
            </Show>

            <div class="mx-auto flex w-full max-w-7xl flex-col items-center gap-16 pt-20 lg:flex-row lg:gap-20">
                <div class="flex flex-1 flex-col items-center text-center lg:items-start lg:text-left">
                    <div style=step(0)>
                        <span class=move || palette().eyebrow>{PROFILE.headline}</span>
                    </div>
                    <h1
                        style=step(1)
                        class=move || {
                            format!(
                                "mt-8 text-4xl font-bold leading-[1.1] tracking-tight sm:text-5xl lg:text-6xl xl:text-7xl {}",
                                if theme.get().animates() { "text-white" } else { "text-zinc-900" },
                            )
                        }
                    >
                        "Building "
                        // rebuilt on every change so the entrance animation replays
                        {move || {
                            let word = keyword.get().current();
                            view! {
                                <span class=format!(
                                    "keyword-swap inline-block {}",
                                    palette().accent,
                                )>{word}</span>
                            }
                        }}
                        <br />
                        "Web Experiences"
                    </h1>
                    <p style=step(2) class=move || format!("mt-6 max-w-lg {}", palette().body)>
                        "I craft production-ready web applications using modern frontend, backend, and cloud technologies, delivering systems that scale."
                    </p>
                    <p style=step(3) class=move || format!("mt-3 max-w-lg {}", palette().muted)>
                        "Currently contributing as a Full-Stack Developer at Incresco, building real-world systems used by multiple institutions."
                    </p>
                    <div style=step(4) class="mt-10 flex flex-col gap-3 sm:flex-row sm:gap-4">
                        <a href=Anchor::Experience.href() class=move || palette().button>
                            "View Experience"
                            <Glyph icon=Icon::ArrowRight />
                        </a>
                        <a href=Anchor::Projects.href() class=move || palette().button_secondary>
                            "View Projects"
                        </a>
                    </div>
                    <div style=step(5) class="mt-12 flex items-center gap-8 text-sm">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="flex flex-col">
                                        <span class="text-xl font-bold">{stat.value}</span>
                                        <span class=move || palette().muted>{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Show
                    when=move || theme.get().animates()
                    fallback=|| {
                        view! {
                            <ImageFrame
                                src=PROFILE.avatar_path
                                alt=PROFILE.name
                                class="hidden h-72 w-72 shrink-0 rounded-full lg:block"
                            />
                        }
                    }
                >
                    <HeroVisual />
                </Show>
            </div>
        </section>
    }
}

/// Orbiting tech labels around a glowing code glyph.
#[component]
fn HeroVisual() -> impl IntoView {
    view! {
        <div class="relative hidden flex-1 items-center justify-center lg:flex">
            <div class="relative flex h-[420px] w-[420px] items-center justify-center xl:h-[480px] xl:w-[480px]">
                <div class="absolute inset-0 rounded-full border border-white/[0.06]" />
                <div class="absolute inset-4 rounded-full border border-white/[0.04] animate-spin-slow" />
                <div class="absolute inset-8 rounded-full border border-dashed border-white/[0.05]" />
                <div class="relative flex h-48 w-48 items-center justify-center xl:h-56 xl:w-56">
                    <div class="absolute inset-0 rounded-full bg-gradient-to-br from-indigo-500/30 via-violet-500/20 to-cyan-500/10 blur-2xl animate-glow-pulse" />
                    <div class="absolute inset-0 rounded-full border border-white/[0.08]" />
                    <span class="relative font-mono text-3xl font-bold text-white/80 xl:text-4xl">
                        "</>"
                    </span>
                </div>
                {HERO_NODES
                    .iter()
                    .map(|(label, position, delay)| {
                        view! {
                            <div
                                class=format!("absolute animate-float {position}")
                                style=format!("animation-delay: {delay}s")
                            >
                                <div class="rounded-lg border border-white/10 bg-white/[0.03] px-3 py-1.5 text-xs font-medium text-gray-300 backdrop-blur-sm">
                                    {*label}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

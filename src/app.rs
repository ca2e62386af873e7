mod interactive_card;
mod navbar;
mod reveal;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{content::PROFILE, theme::Theme};
use navbar::Navbar;
use sections::{Contact, Experience, Footer, Hero, Projects, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// The active presentation variant, shared with every section.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext(pub RwSignal<Theme>);

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<ThemeContext>().0
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(ThemeContext(theme));

    // the server always renders the default variant; the stored preference
    // is applied once hydrated
    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| {
                let preferred = stored.get_untracked();
                log::debug!("restoring theme preference: {preferred}");
                theme.set(preferred);
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |theme, _, _| set_stored.set(*theme),
            false,
        );
    }

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <div
                class=move || format!("min-h-screen {}", theme.get().palette().page)
                style:color-scheme=move || theme.get().color_scheme()
            >
                <Navbar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=PortfolioPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Renders the single portfolio page.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text=PROFILE.headline />
        <Hero />
        <Experience />
        <Projects />
        <Skills />
        <Contact />
    }
}

use leptos::{either::Either, ev::MouseEvent, html, prelude::*};
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};

use crate::pointer::{transform_css, PointerState, SurfaceRect, Tilt, TiltSpring};

use super::use_theme;

/// Card surface that tilts toward the cursor and paints a glow under it.
///
/// Each card owns its pointer state. The displayed tilt follows the target
/// through a spring that only runs while it is moving. In the minimal theme
/// the card is a plain bordered box.
#[component]
pub fn InteractiveCard(
    /// Classes for the inner content wrapper.
    #[prop(into, optional)]
    class: String,
    /// Render the content as a link covering the whole card.
    #[prop(into, optional)]
    href: Option<String>,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let card_ref = NodeRef::<html::Div>::new();
    let pointer = RwSignal::new(PointerState::new());
    let displayed = RwSignal::new(Tilt::FLAT);
    let spring = StoredValue::new(TiltSpring::new());
    let animating = RwSignal::new(false);

    let raf = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            spring.update_value(|s| {
                s.step(args.delta / 1000.0);
            });
            let (tilt, settled) = spring.with_value(|s| (s.current(), s.is_settled()));
            displayed.set(tilt);
            if settled {
                animating.set(false);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );
    Effect::new(move |_| {
        if animating.get() {
            (raf.resume)();
        } else {
            (raf.pause)();
        }
    });

    let retarget = move |tilt: Tilt| {
        spring.update_value(|s| s.set_target(tilt));
        animating.set(true);
    };

    let on_move = move |ev: MouseEvent| {
        if !theme.get_untracked().animates() {
            return;
        }
        let Some(el) = card_ref.get_untracked() else {
            return;
        };
        let r = el.get_bounding_client_rect();
        let rect = SurfaceRect::new(r.left(), r.top(), r.width(), r.height());
        let mut next = pointer.get_untracked();
        if next.track(ev.client_x() as f64, ev.client_y() as f64, rect) {
            pointer.set(next);
            retarget(next.tilt);
        }
    };
    let on_enter = move |_: MouseEvent| {
        if theme.get_untracked().animates() {
            pointer.update(PointerState::enter);
        }
    };
    let on_leave = move |_: MouseEvent| {
        pointer.update(PointerState::leave);
        retarget(Tilt::FLAT);
    };

    let content = children();
    let content = match href {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                class=format!("relative {class}")
            >
                {content}
            </a>
        }),
        None => Either::Right(view! { <div class=format!("relative {class}")>{content}</div> }),
    };

    view! {
        <div
            node_ref=card_ref
            class=move || theme.get().palette().card
            style:transform=move || {
                if theme.get().animates() { transform_css(displayed.get()) } else { "none".to_string() }
            }
            style:transform-style="preserve-3d"
            on:mousemove=on_move
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <Show when=move || theme.get().animates()>
                // gradient border spotlight
                <div
                    class="pointer-events-none absolute -inset-px rounded-2xl opacity-0 transition-opacity duration-300 group-hover:opacity-100"
                    style:background=move || pointer.with(|p| p.spotlight_css())
                />
                <div
                    class="pointer-events-none absolute inset-0 rounded-2xl opacity-0 transition-opacity duration-300 group-hover:opacity-100"
                    style:background=move || pointer.with(|p| p.surface_glow_css())
                />
                <div class="pointer-events-none absolute inset-x-0 top-0 h-px bg-gradient-to-r from-transparent via-indigo-500/20 to-transparent opacity-0 transition-opacity duration-300 group-hover:opacity-100" />
            </Show>
            {content}
        </div>
    }
}

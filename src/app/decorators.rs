//! Scroll-linked overlays. They only read the scroll position.

use leptos::prelude::*;
use leptos_use::{use_raf_fn, use_window_scroll, UseRafFnCallbackArgs};

use crate::config::{GLOW_PRIMARY, GLOW_SECONDARY, PROGRESS_SPRING, SNOWFLAKE_COUNT};
use crate::scroll::{scroll_progress, Spring};
use crate::snowfall::snowflakes;

fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let spring = StoredValue::new(Spring::new(PROGRESS_SPRING, 0.0));
    let (width, set_width) = signal(0.0_f64);

    Effect::new(move |_| {
        let target = scroll_progress(scroll_y.get(), document_height(), viewport_height());
        spring.update_value(|s| s.set_target(target));
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let mut value = 0.0;
        spring.update_value(|s| value = s.step(args.delta));
        if value != width.get_untracked() {
            set_width.set(value);
        }
    });

    view! {
        <div
            class="fixed left-0 top-0 h-1 w-full bg-gradient-to-r from-accent to-accent2 z-40"
            style=move || format!("transform: scaleX({}); transform-origin: 0% 50%;", width.get())
        />
    }
}

#[component]
pub fn FloatingGlows() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let glow_style = |offset: f64| format!("transform: translateY({offset}px); will-change: transform;");

    view! {
        <div
            aria-hidden="true"
            class="pointer-events-none fixed -left-32 top-10 h-[420px] w-[420px] rounded-full bg-accent/25 blur-[80px] z-0"
            style=move || glow_style(GLOW_PRIMARY.offset(scroll_y.get()))
        />
        <div
            aria-hidden="true"
            class="pointer-events-none fixed right-[-120px] bottom-[-40px] h-[520px] w-[520px] rounded-full bg-accent2/20 blur-[90px] z-0"
            style=move || glow_style(GLOW_SECONDARY.offset(scroll_y.get()))
        />
    }
}

#[component]
pub fn Snowfall() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none fixed inset-0 z-10 overflow-hidden">
            {snowflakes(SNOWFLAKE_COUNT)
                .into_iter()
                .map(|flake| view! { <span class="snowflake" style=flake.style() /> })
                .collect_view()}
        </div>
    }
}

use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_timeout_fn, utils::Pausable, UseTimeoutFnReturn};

use crate::config::{Timings, ACTIVE};
use crate::content::{SocialIcon, LOCATION, OWNER, PROFILE_IMAGE, SOCIALS};
use crate::rotating::RotatingText;
use crate::typewriter::Typewriter;

use super::nav::NavScroller;
use super::reveal::Reveal;

#[component]
pub fn Hero() -> impl IntoView {
    let copy = ACTIVE.hero;
    let nav = expect_context::<NavScroller>();

    view! {
        <section id="hero" class="pt-20 md:pt-28 grid md:grid-cols-[1.2fr_1fr] gap-12 items-center">
            <div class="space-y-6">
                <Badge text=copy.badge />
                <Reveal class="space-y-4">
                    <h1 class="hero-title text-5xl sm:text-6xl lg:text-7xl font-display font-extrabold text-white leading-tight">
                        {copy.headline}
                        " "
                        <span class="hero-highlight">{copy.highlight}</span>
                        "."
                    </h1>
                    <p class="text-lg text-white/70 leading-7 max-w-2xl">
                        <TypeWriter
                            text=copy.intro
                            speed=Timings::TYPEWRITER_SPEED_MS
                            delay=Timings::TYPEWRITER_DELAY_MS
                        />
                    </p>
                </Reveal>

                <div class="flex flex-wrap items-center gap-3 text-sm text-white/80">
                    <span class="pill bg-white/10 text-white">
                        "✦ " <RotatingTitle phrases=copy.titles />
                    </span>
                    <span>"📍 Based in " {LOCATION}</span>
                    <span>"6+ yrs shipping"</span>
                </div>

                <div class="flex flex-wrap gap-3">
                    <a
                        href="#projects"
                        class="btn-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.scroll_to("projects");
                        }
                    >
                        "View Projects →"
                    </a>
                    <a
                        href="#contact"
                        class="btn-ghost"
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.scroll_to("contact");
                        }
                    >
                        "Let's Talk"
                    </a>
                </div>

                <div class="flex gap-3">
                    {SOCIALS
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    class="btn-ghost rounded-full p-3"
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label=s.label
                                >
                                    <SocialGlyph icon=s.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <ProfilePhoto />
        </section>
    }
}

#[component]
fn SocialGlyph(icon: SocialIcon) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            class="h-5 w-5"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[component]
fn Badge(text: &'static str) -> impl IntoView {
    view! { <span class="pill">"✨ " {text}</span> }
}

/// Cycles the hero's title pill. The interval is dropped with the component.
#[component]
fn RotatingTitle(phrases: &'static [&'static str]) -> impl IntoView {
    let (cycler, set_cycler) = signal(RotatingText::new(phrases));
    let _ = use_interval_fn(
        move || {
            set_cycler.update(|r| {
                r.advance();
            })
        },
        Timings::ROTATING_TEXT_MS,
    );

    view! { <span>{move || cycler.get().current()}</span> }
}

#[component]
pub fn TypeWriter(text: &'static str, speed: u64, delay: u64) -> impl IntoView {
    let writer = RwSignal::new(Typewriter::new(text));

    // ticks before `begin` are ignored by the typewriter
    let Pausable { pause, .. } = use_interval_fn(move || writer.update(Typewriter::tick), speed);
    Effect::new(move |_| {
        if writer.with(Typewriter::is_complete) {
            pause();
        }
    });

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| writer.update(Typewriter::begin), delay as f64);
    start(());

    view! {
        <span>
            {move || writer.with(|w| w.visible_text().to_string())}
            <span
                class=move || {
                    if writer.with(Typewriter::is_complete) {
                        "typewriter-cursor complete"
                    } else {
                        "typewriter-cursor"
                    }
                }
                style=format!("animation-duration: {}ms;", Timings::CURSOR_BLINK_MS)
            />
        </span>
    }
}

#[component]
fn ProfilePhoto() -> impl IntoView {
    view! {
        <div class="profile-card relative aspect-[4/5] rounded-[28px] overflow-hidden border border-white/10 bg-gradient-to-b from-white/10 via-white/5 to-transparent shadow-panel">
            <div class="absolute inset-0 bg-aurora-1 opacity-40 blur-3xl" />
            <img
                src=PROFILE_IMAGE
                alt=format!("Portrait of {OWNER}")
                class="absolute inset-0 h-full w-full object-cover"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-surface/80 via-surface/20 to-transparent" />
            <div class="float absolute left-5 top-5 rounded-2xl bg-white/10 border border-white/10 px-4 py-3 backdrop-blur-md">
                <p class="text-xs text-white/70">"Role"</p>
                <p class="text-base font-semibold text-white">"Frontend Engineer"</p>
            </div>
            <div class="absolute right-5 bottom-6 rounded-2xl bg-white/10 border border-white/10 px-4 py-3 backdrop-blur-md">
                <p class="text-xs text-white/70">"Location"</p>
                <p class="text-base font-semibold text-white">{LOCATION}</p>
            </div>
        </div>
    }
}

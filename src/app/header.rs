use leptos::prelude::*;

use crate::content::{NAV_ITEMS, OWNER, RESUME_URL};

use super::nav::NavScroller;
use super::theme::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<NavScroller>();
    let initial = OWNER.chars().next().unwrap_or('·').to_string();

    view! {
        <header class="sticky top-0 z-30 backdrop-blur-lg bg-surface/70 border-b border-white/10">
            <div class="max-w-6xl mx-auto flex items-center justify-between px-5 sm:px-8 py-4">
                <button
                    type="button"
                    on:click=move |_| nav.scroll_to_top()
                    class="flex items-center gap-2 text-white font-display text-lg"
                >
                    <span class="h-8 w-8 rounded-xl bg-gradient-to-br from-accent to-accent2 grid place-items-center text-surface font-semibold shadow-glow">
                        {initial}
                    </span>
                    <span class="hidden sm:block">{OWNER}</span>
                </button>
                <nav class="hidden md:flex items-center gap-8 text-sm text-white/80">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let anchor = item.anchor;
                            view! {
                                <a
                                    href=format!("#{anchor}")
                                    class="cursor-pointer hover:text-white"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        nav.scroll_to(anchor);
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-3">
                    <a
                        href=RESUME_URL
                        class="btn-ghost text-xs hidden sm:inline-flex"
                        target="_blank"
                        rel="noreferrer"
                    >
                        "Resume →"
                    </a>
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

use leptos::prelude::*;

use crate::content::{HIGHLIGHTS, STATS};

use super::reveal::{Reveal, SectionTitle};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="mt-24 md:mt-32 grid md:grid-cols-[1.1fr_0.9fr] gap-10 md:gap-14 items-start">
            <Reveal>
                <SectionTitle
                    eyebrow="About"
                    title="Strategy-led design, code-level craft."
                    kicker="I work closely with founders and product teams to turn fuzzy briefs into expressive, measurable experiences."
                />
                <div class="mt-6 space-y-3 text-white/70 leading-7">
                    <p>
                        "From landing pages that tell a story to dashboards that feel effortless, I combine systems thinking, rapid prototyping, and motion to ship experiences people remember."
                    </p>
                    <p>
                        "I keep a tight feedback loop, pair with designers, and lean on reusable patterns so teams can move faster without trading polish."
                    </p>
                </div>
                <div class="mt-6 grid grid-cols-3 gap-4 text-center">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="glass rounded-2xl px-3 py-4">
                                    <p class="text-xl font-semibold text-white">{stat.value}</p>
                                    <p class="text-xs text-white/60">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>

            <Reveal index=1 class="space-y-5">
                <div class="glass rounded-3xl p-6 border border-white/10">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-sm text-white/70">"Availability"</p>
                            <p class="text-lg text-white font-semibold">"March 2026"</p>
                        </div>
                        <span class="h-3 w-3 rounded-full bg-emerald-400 shadow-glow" />
                    </div>
                    <p class="text-sm text-white/70 mt-3 leading-6">
                        "Open to fractional roles, launches, and short, intense sprints."
                    </p>
                </div>
                <div class="glass rounded-3xl p-6 border border-white/10 space-y-4">
                    <p class="text-sm text-white/70">"Highlights"</p>
                    <ul class="space-y-3 text-sm text-white/80">
                        {HIGHLIGHTS.iter().map(|h| view! { <li>"• " {*h}</li> }).collect_view()}
                    </ul>
                </div>
            </Reveal>
        </section>
    }
}

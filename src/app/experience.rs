use leptos::prelude::*;

use crate::content::{ExperienceEntry, EXPERIENCE};

use super::reveal::{Reveal, SectionTitle};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="mt-24 md:mt-32 space-y-8">
            <SectionTitle eyebrow="Experience" title="Momentum over the years." />
            <div class="relative pl-4 md:pl-8">
                <div class="absolute left-1 md:left-5 top-2 bottom-2 w-px bg-white/10" />
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! { <ExperienceItem item=*item index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceItem(item: ExperienceEntry, index: usize) -> impl IntoView {
    view! {
        <Reveal index class="relative pl-8">
            <div class="absolute left-0 top-2 h-3 w-3 rounded-full bg-accent shadow-glow" />
            <p class="text-xs uppercase tracking-[0.2em] text-accent2">{item.period}</p>
            <h3 class="text-lg font-semibold text-white mt-1">{item.role}</h3>
            <p class="text-sm text-white/70">{item.place}</p>
            <p class="text-sm text-white/70 mt-2 leading-6">{item.summary}</p>
        </Reveal>
    }
}

use leptos::prelude::*;

use crate::config::ACTIVE;
use crate::content::Project;
use crate::projects::ProjectFilter;

use super::reveal::{Reveal, SectionTitle};

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());
    let visible = Memo::new(move |_| {
        filter
            .get()
            .apply(ACTIVE.projects)
            .into_iter()
            .copied()
            .collect::<Vec<Project>>()
    });

    view! {
        <section id="projects" class="mt-24 md:mt-32 space-y-8">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-6">
                <SectionTitle
                    eyebrow="Projects"
                    title="Selected work."
                    kicker="A mix of product launches, dashboards and experiments."
                />
                <div class="flex flex-wrap gap-2">
                    {ProjectFilter::ALL_TAGS
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <button
                                    class="filter-chip"
                                    class:active=move || filter.get() == tag
                                    on:click=move |_| {
                                        log::debug!("project filter -> {tag}");
                                        set_filter.set(tag);
                                    }
                                >
                                    {tag.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="grid gap-10">
                <For
                    each=move || visible.get().into_iter().enumerate()
                    key=|(index, project)| (*index, project.title)
                    let((index, project))
                >
                    <ProjectCard project index />
                </For>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let layout = if index % 2 == 1 {
        "grid md:grid-cols-2 gap-6 md:gap-10 items-center md:[&>*:first-child]:order-2"
    } else {
        "grid md:grid-cols-2 gap-6 md:gap-10 items-center"
    };

    view! {
        <Reveal index class=format!("glass rounded-3xl p-6 md:p-8 border border-white/10 {layout}")>
            <div class="relative aspect-video rounded-2xl overflow-hidden bg-gradient-to-br from-accent/30 via-surface to-accent2/20">
                {project
                    .image
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=project.title
                                loading="lazy"
                                class="h-full w-full object-cover transition-transform duration-500 hover:scale-105"
                            />
                        }
                    })}
            </div>
            <div class="space-y-4">
                <p class="text-xs uppercase tracking-[0.2em] text-accent2">{project.category.as_str()}</p>
                <h3 class="text-2xl font-semibold text-white">{project.title}</h3>
                <p class="text-sm text-white/70 leading-6">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|t| view! { <span class="pill text-xs">{*t}</span> })
                        .collect_view()}
                </div>
                <div class="flex gap-3 pt-2">
                    <a href=project.link class="btn-primary" target="_blank" rel="noreferrer">
                        "Live ↗"
                    </a>
                    <a href=project.repo class="btn-ghost" target="_blank" rel="noreferrer">
                        "Code"
                    </a>
                </div>
            </div>
        </Reveal>
    }
}

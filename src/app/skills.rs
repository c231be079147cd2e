use leptos::prelude::*;

use crate::config::{ACTIVE, ORBIT_PERIOD_S, ORBIT_RADIUS, ORBIT_RINGS};
use crate::content::{Skill, SKILLS};
use crate::orbit::{orbit_positions, OrbitHover, OrbitPoint};

use super::reveal::SectionTitle;

const ICON_SIZE: f64 = 58.0;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="mt-24 md:mt-32 space-y-6">
            <SectionTitle
                eyebrow="Skills"
                title="Orbiting stack."
                kicker="Hover any icon to see depth and proficiency."
            />
            <SkillOrbit />
        </section>
    }
}

#[component]
fn SkillOrbit() -> impl IntoView {
    let rotate = ACTIVE.rotate_orbit;
    let hover = RwSignal::new(OrbitHover::default());
    // the ring and every icon share one pause flag
    let ring_class =
        move || format!("absolute inset-0 {}", hover.with(|h| h.spin_class(rotate, "orbit-ring")));
    let icon_class =
        move || format!("relative {}", hover.with(|h| h.spin_class(rotate, "counter-rotate")));

    let entries = SKILLS
        .iter()
        .zip(orbit_positions(SKILLS.len(), ORBIT_RADIUS))
        .enumerate()
        .map(|(index, (skill, point))| {
            view! {
                <div
                    class="absolute"
                    style=format!(
                        "left: 50%; top: 50%; transform: translate({}px, {}px);",
                        point.x - ICON_SIZE / 2.0,
                        point.y - ICON_SIZE / 2.0,
                    )
                    on:mouseenter=move |_| hover.update(|h| h.enter(index))
                    on:mouseleave=move |_| hover.update(|h| h.leave(index))
                >
                    <div class=icon_class style=format!("width: {ICON_SIZE}px; height: {ICON_SIZE}px;")>
                        <div class="h-full w-full grid place-items-center rounded-full border border-white/15 bg-white/10 backdrop-blur-sm shadow-panel transition-transform duration-200 hover:scale-110">
                            <img src=skill.logo alt=skill.name class="h-7 w-7 object-contain" />
                        </div>
                        <SkillTooltip skill=*skill index point hover />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="relative mt-10 mb-6 flex items-center justify-center">
            <div
                class="relative h-[360px] w-full max-w-[560px]"
                style=format!("--orbit-period: {ORBIT_PERIOD_S}s;")
            >
                {ORBIT_RINGS
                    .iter()
                    .map(|r| {
                        view! {
                            <div
                                class="absolute inset-0 m-auto rounded-full border border-white/10"
                                style=format!("width: {}px; height: {}px;", r * 2, r * 2)
                            />
                        }
                    })
                    .collect_view()}
                <div class="float absolute inset-0 flex items-center justify-center">
                    <div class="h-28 w-28 rounded-full bg-gradient-to-b from-accent/70 to-accent2/50 blur-[2px]" />
                    <div class="absolute h-24 w-24 rounded-full bg-surface/80 border border-white/10 grid place-items-center text-white font-semibold">
                        "Stack"
                    </div>
                </div>
                <div class=ring_class>{entries}</div>
            </div>
        </div>
    }
}

#[component]
fn SkillTooltip(
    skill: Skill,
    index: usize,
    point: OrbitPoint,
    hover: RwSignal<OrbitHover>,
) -> impl IntoView {
    let anchor = ACTIVE.tooltip_anchor;
    let (dx, dy) = point.tooltip_offset(anchor, ICON_SIZE);
    let (tx, ty) = point.tooltip_translate(anchor);
    let active = move || hover.with(|h| h.is_hovered(index));

    view! {
        <div
            class=move || {
                if active() {
                    "skill-tooltip opacity-100 scale-100"
                } else {
                    "skill-tooltip opacity-0 scale-95"
                }
            }
            style=format!(
                "left: calc(50% + {dx}px); top: calc(50% + {dy}px); transform: translate({tx}%, {ty}%);",
            )
        >
            <p class="text-sm font-semibold text-white">{skill.name}</p>
            <div class="mt-2 h-2 rounded-full bg-white/10 overflow-hidden">
                <div
                    class="h-full rounded-full transition-all duration-300"
                    style=move || {
                        format!(
                            "width: {}%; background: linear-gradient(90deg, {}, rgba(255,255,255,0.9));",
                            hover.with(|h| h.bar_width(index, skill.percent)),
                            skill.color,
                        )
                    }
                />
            </div>
            <p class="mt-1 text-[11px] text-white/70">{format!("{}% proficiency", skill.percent)}</p>
        </div>
    }
}

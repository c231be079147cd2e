use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{RevealFrame, REVEAL_THRESHOLD};

/// Fades its children in while they are on screen.
///
/// `index` staggers siblings that enter the viewport together.
#[component]
pub fn Reveal(
    #[prop(optional)] index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    let _ = use_intersection_observer_with_options(
        node,
        move |entries, _| {
            if let Some(entry) = entries.first() {
                set_visible.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    view! {
        <div node_ref=node class=class style=move || RevealFrame::new(visible.get(), index).style()>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionTitle(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] kicker: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <p class="text-sm uppercase tracking-[0.25em] text-accent2">{eyebrow}</p>
            <h2 class="text-3xl sm:text-4xl font-display text-white">{title}</h2>
            {kicker.map(|k| view! { <p class="text-sm text-white/70 max-w-2xl">{k}</p> })}
        </div>
    }
}

use leptos::prelude::*;
use leptos_use::{
    use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions,
};

use crate::config::NavScroll;
use crate::scroll::ScrollAnimation;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveScroll {
    anim: ScrollAnimation,
    elapsed_ms: f64,
}

/// Eased in-page scrolling for nav links and call-to-action buttons.
#[derive(Clone, Copy)]
pub struct NavScroller {
    active: RwSignal<Option<ActiveScroll>>,
}

impl NavScroller {
    pub fn scroll_to(&self, anchor: &str) {
        let Some(el) = document().get_element_by_id(anchor) else {
            log::warn!("No section with id {anchor}");
            return;
        };
        let top = el.get_bounding_client_rect().top();
        self.start(ScrollAnimation::to_element(
            current_scroll_y(),
            top,
            NavScroll::OFFSET_PX,
            NavScroll::DURATION_MS,
        ));
    }

    pub fn scroll_to_top(&self) {
        self.start(ScrollAnimation::to_top(current_scroll_y(), NavScroll::TO_TOP_MS));
    }

    fn start(&self, anim: ScrollAnimation) {
        self.active.set(Some(ActiveScroll {
            anim,
            elapsed_ms: 0.0,
        }));
    }
}

fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// The frame loop only runs while an animation is in flight.
pub fn provide_nav_scroller() -> NavScroller {
    let active = RwSignal::new(None::<ActiveScroll>);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let Some(mut scroll) = active.get_untracked() else {
                return;
            };
            scroll.elapsed_ms += args.delta;
            window().scroll_to_with_x_and_y(0.0, scroll.anim.position_at(scroll.elapsed_ms));
            let finished = scroll.anim.is_finished(scroll.elapsed_ms);
            active.set((!finished).then_some(scroll));
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if active.with(Option::is_some) {
            resume();
        } else {
            pause();
        }
    });

    let scroller = NavScroller { active };
    provide_context(scroller);
    scroller
}

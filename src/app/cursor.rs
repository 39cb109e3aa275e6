use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};

use crate::decor::{cursor_target, CURSOR_PULSE, CURSOR_SIZE, CURSOR_START};
use crate::motion::{Spring2, SpringConfig};

use super::clock::use_clock;

/// px and px/s below which the ring counts as resting on the pointer.
const REST: f64 = 0.01;

/// Ring that trails the pointer on a spring and pulses while it goes.
#[component]
pub fn CursorGlow() -> impl IntoView {
    let clock = use_clock();
    let target = StoredValue::new(CURSOR_START);
    let spring = StoredValue::new(Spring2::new(
        SpringConfig::new(200.0, 25.0),
        CURSOR_START,
    ));
    let (pos, set_pos) = signal(CURSOR_START);

    // both are released when the component is disposed
    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        target.set_value(cursor_target(e.client_x() as f64, e.client_y() as f64));
    });
    let _raf = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let goal = target.get_value();
        if spring.with_value(|s| s.is_settled(goal, REST, REST)) {
            return;
        }
        let mut next = CURSOR_START;
        spring.update_value(|s| next = s.step(goal, args.delta / 1000.0));
        if next != pos.get_untracked() {
            set_pos.set(next);
        }
    });

    let style = move || {
        let p = pos.get();
        let scale = CURSOR_PULSE.at(clock.now.get());
        format!(
            "width: {CURSOR_SIZE}px; height: {CURSOR_SIZE}px; transform: translate({:.1}px, {:.1}px) scale({scale:.3});",
            p.x, p.y
        )
    };

    view! {
        <div
            aria-hidden="true"
            class="fixed top-0 left-0 z-[9999] rounded-full border-2 border-purple-600 bg-transparent pointer-events-none"
            style=style
        ></div>
    }
}

use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::motion::{Pose, Tween};

/// Seconds since the page was mounted, advanced once per animation frame.
/// Stays at zero on the server so the first client render matches the SSR
/// markup.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    pub now: Signal<f64>,
}

pub fn provide_clock() -> AnimationClock {
    let (now, set_now) = signal(0.0);
    let origin = StoredValue::new(None::<f64>);

    let _raf = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let ts = args.timestamp / 1000.0;
        let start = match origin.get_value() {
            Some(s) => s,
            None => {
                origin.set_value(Some(ts));
                ts
            }
        };
        set_now.set(ts - start);
    });

    let clock = AnimationClock { now: now.into() };
    provide_context(clock);
    clock
}

pub fn use_clock() -> AnimationClock {
    use_context::<AnimationClock>().unwrap_or(AnimationClock {
        now: Signal::stored(0.0),
    })
}

/// Pose of a mount-time entrance; settles once the tween is done.
pub fn use_entrance(tween: Tween) -> Memo<Pose> {
    let clock = use_clock();
    Memo::new(move |_| tween.at(clock.now.get()))
}

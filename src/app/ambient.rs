use leptos::prelude::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};
use rand::{rngs::SmallRng, SeedableRng};

use crate::decor::{Ambient, AmbientConfig, Bubble, Fish};

use super::clock::{use_clock, AnimationClock};

/// Background bubbles and fish. Rolled on the client after mount so the
/// server markup carries no random state.
#[component]
pub fn AmbientLayer() -> impl IntoView {
    let clock = use_clock();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let (ambient, set_ambient) = signal(Ambient::default());

    Effect::new(move |_| {
        let mut rng = SmallRng::from_entropy();
        match Ambient::generate(&mut rng, &AmbientConfig::default()) {
            Ok(rolled) => {
                log::debug!(
                    "ambient: {} bubbles, {} fish",
                    rolled.bubbles.len(),
                    rolled.fish.len()
                );
                set_ambient.set(rolled);
            }
            Err(e) => log::warn!("ambient decorations disabled: {e}"),
        }
    });

    view! {
        <div aria-hidden="true" class="fixed inset-0 -z-10 overflow-hidden pointer-events-none">
            <For
                each=move || ambient.get().fish
                key=|f| f.key
                children=move |fish: Fish| view! { <FishSprite fish clock /> }
            />
            <For
                each=move || ambient.get().bubbles
                key=|b| b.key
                children=move |bubble: Bubble| view! { <BubbleDot bubble clock viewport_height=height /> }
            />
        </div>
    }
}

#[component]
fn BubbleDot(bubble: Bubble, clock: AnimationClock, viewport_height: Signal<f64>) -> impl IntoView {
    let style = move || bubble.style(bubble.frame(clock.now.get(), viewport_height.get()));
    view! {
        <div
            class="fixed top-0 rounded-full bg-white/30 shadow-[inset_0_0_5px_rgba(255,255,255,0.6),0_0_8px_rgba(0,234,255,0.3)]"
            style=style
        ></div>
    }
}

#[component]
fn FishSprite(fish: Fish, clock: AnimationClock) -> impl IntoView {
    let style = move || fish.style(fish.frame(clock.now.get()));
    view! {
        <div class="fixed top-0 left-0 h-auto opacity-80" style=style>
            <img src="/fish.png" alt="" class="w-full h-auto select-none" draggable="false" />
        </div>
    }
}

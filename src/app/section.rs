use leptos::{html, prelude::*};
use leptos_use::core::IntoElementsMaybeSignal;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::Pose;
use crate::nav::{Intersection, Reveal, CENTER_BAND_MARGIN};

use super::clock::use_clock;

/// Drive `reveal` from the visibility of `target` and return its pose.
pub fn use_reveal<El, M>(target: El, reveal: Reveal) -> Memo<Pose>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let clock = use_clock();
    let state = RwSignal::new(reveal);
    let mut thresholds = vec![0.0];
    if reveal.threshold() > 0.0 {
        thresholds.push(reveal.threshold());
    }

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let mut r = state.get_untracked();
                if r.observe(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    clock.now.get_untracked(),
                ) {
                    state.set(r);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(thresholds),
    );

    Memo::new(move |_| state.with(|r| r.pose(clock.now.get())))
}

/// A named landmark of the page. Reports whether it spans the middle of the
/// viewport and optionally fades in the first time it is scrolled to.
#[component]
pub fn PageSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] reveal: bool,
    on_center: Callback<Intersection>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();

    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                on_center.run(Intersection {
                    id,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        },
        UseIntersectionObserverOptions::default().root_margin(CENTER_BAND_MARGIN.to_string()),
    );

    let pose = reveal.then(|| use_reveal(node, Reveal::section()));
    let style = move || pose.map(|p| p.get().to_style()).unwrap_or_default();

    view! {
        <section
            id=id
            node_ref=node
            class=format!("relative min-h-screen px-6 py-24 scroll-mt-16 {class}")
            style=style
        >
            {children()}
        </section>
    }
}

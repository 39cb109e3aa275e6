use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::content::PROFILE;
use crate::motion::{Easing, Pose, Transition, Tween};
use crate::nav::{Intersection, Reveal, RevealMode};

use super::clock::use_entrance;
use super::contact::Contact;
use super::projects::Projects;
use super::section::{use_reveal, PageSection};
use super::skills::Skills;

/// Hero lines drop in one after another.
const fn hero_line(delay: f64, from_y: f64) -> Tween {
    Tween::new(
        Pose::hidden().offset_y(from_y),
        Pose::REST,
        Transition::new(0.8).delay(delay).ease(Easing::EaseOut),
    )
}

#[component]
pub fn HomePage(on_center: Callback<Intersection>, on_select: Callback<&'static str>) -> impl IntoView {
    view! {
        <Title text=PROFILE.name />
        <Hero on_center on_select />
        <About on_center />
        <Skills on_center />
        <Projects on_center />
        <Contact on_center />
    }
}

#[component]
fn Hero(on_center: Callback<Intersection>, on_select: Callback<&'static str>) -> impl IntoView {
    let greeting = use_entrance(hero_line(0.2, -20.0));
    let name = use_entrance(hero_line(0.4, -20.0));
    let headline = use_entrance(hero_line(0.6, -20.0));
    let summary = use_entrance(hero_line(0.8, -20.0));
    let cta = use_entrance(hero_line(1.0, 20.0));

    view! {
        <PageSection id="home" class="flex items-center justify-center" on_center>
            <div class="max-w-3xl mx-auto text-left">
                <p class="text-purple-400 text-lg mb-2" style=move || greeting.get().to_style()>
                    {PROFILE.greeting}
                </p>
                <h1
                    class="text-5xl md:text-7xl font-bold mb-4"
                    style=move || name.get().to_style()
                >
                    <span class="bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                        {PROFILE.name} "."
                    </span>
                </h1>
                <h2
                    class="text-2xl md:text-4xl text-gray-400 font-semibold mb-6"
                    style=move || headline.get().to_style()
                >
                    {PROFILE.headline}
                </h2>
                <p
                    class="text-base md:text-lg text-gray-300 leading-relaxed mb-8"
                    style=move || summary.get().to_style()
                >
                    {PROFILE.summary}
                </p>
                <div style=move || cta.get().to_style()>
                    <button
                        class="px-6 py-3 rounded-md border border-purple-500 text-purple-300 hover:bg-purple-500/20 transition-colors duration-200"
                        on:click=move |_| on_select.run("projects")
                    >
                        "View Projects"
                    </button>
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn About(on_center: Callback<Intersection>) -> impl IntoView {
    let portrait_ref = NodeRef::<html::Div>::new();
    let text_ref = NodeRef::<html::Div>::new();
    let portrait = use_reveal(
        portrait_ref,
        Reveal::new(
            RevealMode::Once,
            Tween::new(
                Pose::hidden().scaled(0.8),
                Pose::REST,
                Transition::new(1.0).ease(Easing::EaseOut),
            ),
        ),
    );
    let text = use_reveal(
        text_ref,
        Reveal::new(
            RevealMode::Once,
            Tween::new(
                Pose::hidden().offset_x(80.0),
                Pose::REST,
                Transition::new(0.8).ease(Easing::EaseOut),
            ),
        ),
    );

    view! {
        <PageSection id="about" reveal=true on_center>
            <div class="max-w-6xl mx-auto flex flex-col lg:flex-row items-center gap-12">
                <div
                    node_ref=portrait_ref
                    class="flex-shrink-0"
                    style=move || portrait.get().to_style()
                >
                    <img
                        src=PROFILE.portrait_path
                        alt="About Me"
                        class="w-64 h-64 lg:w-80 lg:h-80 object-cover rounded-2xl border-2 border-purple-500/40 shadow-[0_0_30px_rgba(147,51,234,0.3)]"
                    />
                </div>
                <div node_ref=text_ref class="max-w-2xl" style=move || text.get().to_style()>
                    <h2 class="text-3xl font-bold mb-6 text-purple-300">{PROFILE.about_title}</h2>
                    <p class="text-base md:text-lg leading-relaxed text-gray-300">{PROFILE.about}</p>
                </div>
            </div>
        </PageSection>
    }
}

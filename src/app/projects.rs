use leptos::{either::Either, html, prelude::*};

use crate::content::{Layout, Project, PROJECTS};
use crate::motion::{Easing, Pose, Transition, Tween};
use crate::nav::{Intersection, Reveal, RevealMode};

use super::section::{use_reveal, PageSection};

const CARD_ENTRANCE: Tween = Tween::new(
    Pose::hidden().offset_y(40.0),
    Pose::REST,
    Transition::new(0.6).ease(Easing::EaseOut),
);

#[component]
pub fn Projects(on_center: Callback<Intersection>) -> impl IntoView {
    view! {
        <PageSection id="projects" on_center>
            <h2 class="text-4xl font-bold text-center mb-16">"Featured Projects"</h2>
            <div class="max-w-6xl mx-auto flex flex-col gap-24">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard index project=*project /> })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let pose = use_reveal(node, Reveal::new(RevealMode::WhileInView, CARD_ENTRANCE));
    let layout = Layout::for_index(index);

    view! {
        <div
            node_ref=node
            class=format!("flex flex-col {} items-center gap-10", layout.class())
            style=move || pose.get().to_style()
        >
            <div class="flex-1">
                <h4 class="text-sm tracking-widest text-cyan-400 mb-2">
                    {format!("PROJECT {}", index + 1)}
                </h4>
                <h3 class="text-3xl font-bold mb-2">{project.title}</h3>
                <p class="text-purple-300 mb-4">{project.tagline}</p>
                <p class="text-gray-300 leading-relaxed mb-6">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs rounded-full bg-purple-500/10 border border-purple-500/30 text-purple-200">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-6">
                    <ExternalLink url=project.links.repository() label="GitHub" />
                    <ExternalLink url=project.links.live() label="Live Demo" />
                </div>
            </div>
            <div class="relative flex-1 transition-transform duration-300 hover:scale-105">
                <div class="absolute -inset-2 rounded-xl border border-cyan-400/30"></div>
                <img
                    src=project.image_path
                    alt=project.title
                    loading="lazy"
                    class="relative w-full rounded-xl object-cover"
                />
            </div>
        </div>
    }
}

#[component]
fn ExternalLink(url: Option<&'static str>, label: &'static str) -> impl IntoView {
    match url {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="text-cyan-300 hover:text-white underline-offset-4 hover:underline"
            >
                {label}
            </a>
        }),
        None => Either::Right(()),
    }
}

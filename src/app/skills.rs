use leptos::prelude::*;

use crate::content::{Skill, SkillCategory, SKILLS};
use crate::nav::Intersection;

use super::section::PageSection;

#[component]
pub fn Skills(on_center: Callback<Intersection>) -> impl IntoView {
    view! {
        <PageSection id="skills" reveal=true on_center>
            <h2 class="text-4xl font-bold text-center mb-12">"My Toolkit"</h2>
            <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {SKILLS
                    .iter()
                    .map(|category| view! { <CategoryCard category=*category /> })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn CategoryCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl border border-purple-500/20 bg-white/5 transition-all duration-300 hover:scale-[1.03] hover:shadow-[0_0_30px_rgba(147,51,234,0.3)]">
            <h3 class="text-xl font-semibold mb-6 text-purple-300">{category.name}</h3>
            <div class="grid grid-cols-3 sm:grid-cols-4 gap-4">
                {category
                    .items
                    .iter()
                    .map(|skill| view! { <SkillItem skill=*skill /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillItem(skill: Skill) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2 text-center transition-transform duration-200 hover:scale-110">
            <img
                src=skill.logo_url
                alt=skill.name
                title=skill.name
                loading="lazy"
                class="w-10 h-10 object-contain"
            />
            <p class="text-xs text-gray-300">{skill.name}</p>
        </div>
    }
}

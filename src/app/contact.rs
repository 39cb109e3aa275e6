use leptos::prelude::*;

use crate::content::{build_year, PROFILE, SOCIAL_LINKS};
use crate::nav::Intersection;

use super::section::PageSection;

#[component]
pub fn Contact(on_center: Callback<Intersection>) -> impl IntoView {
    view! {
        <PageSection id="contact" class="flex flex-col items-center justify-center text-center" reveal=true on_center>
            <h2 class="text-4xl font-bold mb-6">"Let's Connect"</h2>
            <p class="max-w-xl mx-auto text-gray-300 mb-10">{PROFILE.contact_blurb}</p>
            <a
                href=format!("mailto:{}", PROFILE.email)
                class="inline-block px-8 py-3 rounded-md bg-purple-600 hover:bg-purple-500 font-semibold transition-transform duration-200 hover:scale-105"
            >
                "Collaborate"
            </a>
            <div class="flex justify-center gap-6 mt-10 text-3xl">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                                class="text-gray-300 hover:text-purple-400 transition-transform duration-200 hover:scale-125 hover:-translate-y-1"
                            >
                                <i class=link.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
        <footer class="py-8 text-center text-sm text-gray-500">
            {format!("© {} {} | Designed & Built with passion.", build_year(), PROFILE.name)}
        </footer>
    }
}

use leptos::prelude::*;

use crate::content::{NavLink, NAV_LINKS, PROFILE};
use crate::motion::{Easing, Pose, Transition, Tween};

use super::clock::use_entrance;

const NAV_ENTRANCE: Tween = Tween::new(
    Pose::hidden().offset_y(-80.0),
    Pose::REST,
    Transition::new(0.8).delay(0.3).ease(Easing::EaseOut),
);
const BRAND_ENTRANCE: Tween = Tween::new(
    Pose::hidden(),
    Pose::REST,
    Transition::new(1.0).delay(0.8).ease(Easing::EaseOut),
);

#[component]
pub fn Header(
    active: Signal<&'static str>,
    menu_open: Signal<bool>,
    scrolled: Signal<bool>,
    on_toggle: Callback<()>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    let nav_pose = use_entrance(NAV_ENTRANCE);
    let brand_pose = use_entrance(BRAND_ENTRANCE);

    view! {
        <header
            class=move || {
                let base = "fixed top-0 inset-x-0 z-50 transition-colors duration-300";
                if scrolled.get() {
                    format!("{base} bg-[#0b0b1a]/80 backdrop-blur shadow-lg")
                } else {
                    format!("{base} bg-transparent")
                }
            }
            style=move || nav_pose.get().to_style()
        >
            <nav class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex flex-wrap items-center justify-between">
                <a
                    href="#home"
                    class="text-2xl font-bold text-purple-400 hover:drop-shadow-[0_0_10px_#9333ea]"
                    style=move || brand_pose.get().to_style()
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_select.run(NAV_LINKS[0].id);
                    }
                >
                    {PROFILE.name}
                </a>
                <MenuButton menu_open on_toggle />
                <ul
                    id="nav-links-list"
                    class=move || {
                        let base = "w-full md:w-auto md:flex md:items-center md:gap-8";
                        if menu_open.get() {
                            format!("{base} flex flex-col gap-4 pt-4 md:pt-0 md:flex-row")
                        } else {
                            format!("{base} hidden")
                        }
                    }
                >
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <NavItem link=*link active on_select /> })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
fn MenuButton(menu_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let bar = "block h-0.5 w-6 bg-current transition-transform duration-300";
    view! {
        <button
            class="md:hidden flex flex-col gap-1.5 p-2 text-gray-100"
            aria-label="Toggle navigation menu"
            aria-expanded=move || menu_open.get().to_string()
            aria-controls="nav-links-list"
            on:click=move |_| on_toggle.run(())
        >
            <span class=move || {
                if menu_open.get() { format!("{bar} translate-y-2 rotate-45") } else { bar.to_string() }
            }></span>
            <span class=move || {
                if menu_open.get() { format!("{bar} opacity-0") } else { bar.to_string() }
            }></span>
            <span class=move || {
                if menu_open.get() {
                    format!("{bar} -translate-y-2 -rotate-45")
                } else {
                    bar.to_string()
                }
            }></span>
        </button>
    }
}

#[component]
fn NavItem(
    link: NavLink,
    active: Signal<&'static str>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    let id = link.id;
    view! {
        <li class="transition-transform duration-200 hover:scale-110">
            <a
                href=format!("#{id}")
                class=move || {
                    if active.get() == id {
                        "text-purple-400 font-semibold drop-shadow-[0_0_8px_#9333ea]"
                    } else {
                        "text-gray-300 hover:text-white"
                    }
                }
                aria-current=move || (active.get() == id).then_some("true")
                on:click=move |ev| {
                    ev.prevent_default();
                    on_select.run(id);
                }
            >
                {link.title}
            </a>
        </li>
    }
}

mod ambient;
mod clock;
mod contact;
mod cursor;
mod dom;
mod header;
mod homepage;
mod projects;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{person_json_ld, PROFILE};
use crate::nav::{Intersection, Navigator};

use ambient::AmbientLayer;
use cursor::CursorGlow;
use dom::DomScroller;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <script type="application/ld+json" inner_html=person_json_ld()></script>
                <MetaTags />
            </head>
            <body class="bg-[#0b0b1a] text-gray-100 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    clock::provide_clock();

    // the only mutable page state, handed down as signals and callbacks
    let nav = RwSignal::new(Navigator::default());
    let active = Signal::derive(move || nav.with(|n| n.active()));
    let menu_open = Signal::derive(move || nav.with(|n| n.menu_open()));
    let scrolled = Signal::derive(move || nav.with(|n| n.is_scrolled()));

    let on_toggle = Callback::new(move |_: ()| nav.update(|n| n.toggle_menu()));
    let on_select = Callback::new(move |id: &'static str| {
        nav.update(|n| {
            if !n.activate(id, &DomScroller) {
                log::debug!("no landmark for #{id}");
            }
        })
    });
    let on_center = Callback::new(move |entry: Intersection| {
        let mut n = nav.get_untracked();
        if n.observe(entry) {
            nav.set(n);
        }
    });

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <CursorGlow />
            <AmbientLayer />
            <Header active menu_open scrolled on_toggle on_select />
            <main class="relative flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=path!("/")
                        view=move || view! { <HomePage on_center on_select /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

mod about;
mod contact;
mod decorators;
mod experience;
mod header;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;
pub mod theme;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::ACTIVE;
use crate::content::{FAVICON, OWNER, SOCIALS};

use about::About;
use contact::Contact;
use decorators::{FloatingGlows, ScrollProgress, Snowfall};
use experience::Experience;
use header::Header;
use hero::Hero;
use nav::provide_nav_scroller;
use projects::Projects;
use skills::Skills;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-body bg-sand text-bg dark:bg-bg dark:text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_nav_scroller();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole single-scroll page.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen">
            <div class="pointer-events-none fixed inset-0 bg-noise opacity-30 [background-size:120px_120px]" />
            <div class="pointer-events-none fixed inset-0 bg-gradient-to-b from-white/5 via-transparent to-accent/10 blur-3xl" />

            <ScrollProgress />
            <FloatingGlows />
            {ACTIVE.snowfall.then(|| view! { <Snowfall /> })}

            <Header />
            <main class="max-w-6xl mx-auto px-5 sm:px-8 relative">
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Experience />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

fn copyright_year() -> i32 {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| chrono::Utc::now().year())
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="max-w-6xl mx-auto px-5 sm:px-8 pb-12 pt-10 text-sm text-white/60 flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between">
            <span>{format!("© {} {OWNER}. Crafted with Rust & Leptos.", copyright_year())}</span>
            <div class="flex gap-3">
                {SOCIALS
                    .iter()
                    .map(|s| {
                        view! {
                            <a href=s.href class="hover:text-white" target="_blank" rel="noreferrer">
                                {s.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

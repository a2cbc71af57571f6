mod about;
mod contact;
mod experience;
mod hero;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{OWNER_FIRST_NAME, OWNER_LAST_NAME};

pub use contact::send_contact_message;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME} - {title}") />
        <Meta
            name="description"
            content="Portfolio of a front-end developer building fast, responsive web applications."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: one scrollable document of sections.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Front-End Developer" />
        <div class="min-h-screen">
            <main>
                <hero::HeroSection />
                <about::AboutSection />
                <skills::SkillsSection />
                <experience::ExperienceSection />
                <projects::ProjectsSection />
                <contact::ContactSection />
            </main>
        </div>
    }
}

/// Shared section heading: `{lead} <gradient>{accent}</gradient>` plus subtitle.
#[component]
fn SectionHeader(
    lead: &'static str,
    accent: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-4">
                {lead} " " <span class="hero-text-gradient">{accent}</span>
            </h2>
            <p class="text-xl text-muted max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
fn TechBadges(technologies: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 rounded-full text-xs bg-primary/10 text-primary border border-primary/20">
                            {*tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

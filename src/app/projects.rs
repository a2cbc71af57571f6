use leptos::prelude::*;

use super::{SectionHeader, TechBadges};
use crate::content::{projects_in, ProjectCategory, ProjectEntry, ProjectStatus};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let live = projects_in(ProjectCategory::Live).collect::<Vec<_>>();
    let personal = projects_in(ProjectCategory::Personal).collect::<Vec<_>>();
    // personal cards keep staggering after the live ones
    let offset = live.len();

    view! {
        <section id="projects" class="py-20 bg-background">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    lead="My"
                    accent="Projects"
                    subtitle="Showcase of live applications and personal projects demonstrating technical expertise"
                />
                <div class="mb-16">
                    <div class="flex items-center gap-3 mb-8">
                        <span class="text-2xl">"🧠"</span>
                        <h3 class="text-2xl font-bold text-foreground">"Live Projects"</h3>
                        <span class="px-3 py-1 rounded-full text-xs bg-success text-white">
                            "Currently Active"
                        </span>
                    </div>
                    <div class="grid md:grid-cols-2 gap-8">
                        {live
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| view! { <ProjectCard project index=i /> })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <div class="flex items-center gap-3 mb-8">
                        <span class="text-2xl">"❤️"</span>
                        <h3 class="text-2xl font-bold text-foreground">"Personal Projects"</h3>
                        <span class="px-3 py-1 rounded-full text-xs bg-secondary">
                            "Learning & Development"
                        </span>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {personal
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| view! { <ProjectCard project index={i + offset} /> })
                            .collect_view()}
                    </div>
                </div>
                <div class="card-elegant p-8 mt-16 text-center bg-gradient-primary text-white animate-fade-up">
                    <h3 class="text-2xl font-bold mb-4">"Interested in Working Together?"</h3>
                    <p class="text-lg opacity-90 mb-6">
                        "Let's collaborate on your next project and bring your ideas to life!"
                    </p>
                    <a
                        href="#contact"
                        class="inline-flex items-center gap-2 px-6 py-3 rounded-md bg-white text-primary hover:bg-white/90 font-semibold"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Live => "bg-success text-white",
        ProjectStatus::Completed => "bg-primary/10 text-primary",
        ProjectStatus::InProgress => "bg-warning/20 text-warning",
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry, index: usize) -> impl IntoView {
    view! {
        <div
            class="card-elegant project-card group h-full flex flex-col animate-fade-up"
            style=format!("animation-delay: {}ms", index * 100)
        >
            <div class="relative p-8 bg-gradient-subtle">
                <div class="flex items-center justify-between mb-4">
                    <div class="text-6xl">{project.image}</div>
                    <div class="flex gap-2">
                        {project
                            .live_url
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-2 py-1 rounded-md hover:bg-primary/10"
                                        aria-label=format!("View {} live", project.title)
                                    >
                                        "↗"
                                    </a>
                                }
                            })}
                        {project
                            .github_url
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-2 py-1 rounded-md hover:bg-primary/10"
                                        aria-label=format!("View {} source code", project.title)
                                    >
                                        <i class="devicon-github-plain"></i>
                                    </a>
                                }
                            })}
                    </div>
                </div>
                <h3 class="text-xl font-bold text-foreground mb-2 group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <span class=format!(
                    "inline-block px-2 py-1 rounded text-xs font-medium {}",
                    status_class(project.status),
                )>{project.status.label()}</span>
                <p class="text-muted mt-3">{project.description}</p>
            </div>
            <div class="p-8 flex-1 flex flex-col">
                <p class="text-sm text-muted mb-6 leading-relaxed">{project.long_description}</p>
                <h4 class="font-semibold text-foreground mb-3">"Key Features"</h4>
                <ul class="grid grid-cols-1 gap-2 mb-6 text-sm">
                    {project
                        .features
                        .iter()
                        .map(|f| {
                            view! {
                                <li class="flex items-center gap-2 text-muted">
                                    <span class="w-1.5 h-1.5 rounded-full bg-accent"></span>
                                    {*f}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="mt-auto">
                    <TechBadges technologies=project.technologies />
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use super::{SectionHeader, TechBadges};
use crate::content::{ExperienceEntry, EXPERIENCE};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-gradient-subtle">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    lead="Work"
                    accent="Experience"
                    subtitle="Professional journey and achievements in front-end development"
                />
                <div class="relative">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-primary/30 md:-translate-x-1/2"></div>
                    <div class="space-y-12">
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| view! { <ExperienceCard entry index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry, index: usize) -> impl IntoView {
    let side = if index % 2 == 0 { "md:pr-12" } else { "md:pl-12 md:ml-auto" };
    let dot = if entry.is_current() {
        "bg-success animate-pulse"
    } else {
        "bg-primary"
    };
    view! {
        <div class="relative pl-12 md:pl-0">
            <div class=format!(
                "absolute left-2 md:left-1/2 top-8 w-5 h-5 rounded-full border-4 border-background md:-translate-x-1/2 {dot}",
            )></div>
            <div
                class=format!("md:w-1/2 {side} animate-fade-up")
                style=format!("animation-delay: {}ms", index * 200)
            >
                <div class="card-elegant card-hover p-8">
                    <div class="flex flex-wrap items-start justify-between gap-4 mb-6">
                        <div>
                            <h3 class="text-xl font-bold text-foreground mb-1">{entry.title}</h3>
                            <p class="text-lg font-semibold text-primary">{entry.company}</p>
                            <div class="flex flex-wrap gap-4 mt-2 text-sm text-muted">
                                <span>"📅 " {entry.duration}</span>
                                <span>"📍 " {entry.location}</span>
                            </div>
                        </div>
                        {entry
                            .is_current()
                            .then(|| {
                                view! {
                                    <span class="px-3 py-1 rounded-full text-xs font-semibold bg-success text-white">
                                        "Current"
                                    </span>
                                }
                            })}
                    </div>
                    <h4 class="font-semibold text-foreground mb-3">"Key Achievements"</h4>
                    <ul class="space-y-2 mb-6">
                        {entry
                            .achievements
                            .iter()
                            .map(|a| {
                                view! {
                                    <li class="flex items-start gap-3 text-muted">
                                        <span class="mt-2 w-1.5 h-1.5 rounded-full bg-primary flex-shrink-0"></span>
                                        <span>{*a}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <h4 class="font-semibold text-foreground mb-3">"Technologies Used"</h4>
                    <TechBadges technologies=entry.technologies />
                </div>
            </div>
        </div>
    }
}

use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_timeout_fn, UseIntersectionObserverOptions,
    UseTimeoutFnReturn,
};

use super::SectionHeader;
use crate::content::{ADDITIONAL_EXPERTISE, SKILLS};
use crate::reveal::{RevealTrigger, REVEAL_THRESHOLD};
use crate::skills::{group_by_category, stagger_delay, SkillBar, SkillEntry, FILL_TRANSITION_MS};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let trigger = RwSignal::new(RevealTrigger::new());
    let revealed = Signal::derive(move || trigger.with(RevealTrigger::is_revealed));

    // A missing node simply never reports, leaving the bars at 0.
    use_intersection_observer_with_options(
        section_ref,
        move |entries, observer| {
            let fired = entries
                .iter()
                .any(|entry| trigger.try_update(|t| t.observe(entry)).unwrap_or(false));
            if fired {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    view! {
        <section node_ref=section_ref id="skills" class="py-20 bg-background">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    lead="My"
                    accent="Skills"
                    subtitle="Expertise in modern web technologies and development tools"
                />
                <div class="grid lg:grid-cols-3 gap-8">
                    {group_by_category(SKILLS)
                        .into_iter()
                        .enumerate()
                        .map(|(ci, (category, entries))| {
                            view! {
                                <div
                                    class="card-elegant p-8 animate-fade-up"
                                    style=format!("animation-delay: {}ms", ci * 200)
                                >
                                    <div class="flex items-center gap-3 mb-8">
                                        <span class="text-3xl">{category.icon()}</span>
                                        <h3 class="text-xl font-bold text-foreground">
                                            {category.title()}
                                        </h3>
                                    </div>
                                    <div class="space-y-6">
                                        {entries
                                            .into_iter()
                                            .enumerate()
                                            .map(|(ei, entry)| {
                                                view! {
                                                    <SkillBarView
                                                        entry
                                                        delay=stagger_delay(ci, ei)
                                                        revealed
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="card-elegant p-8 mt-12 animate-fade-up">
                    <h3 class="text-xl font-bold text-foreground mb-6 text-center">
                        "Additional Expertise"
                    </h3>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {ADDITIONAL_EXPERTISE
                            .iter()
                            .map(|(title, desc)| {
                                view! {
                                    <div class="text-center p-4 bg-gradient-subtle rounded-lg hover:bg-gradient-primary hover:text-white transition-all duration-300 group">
                                        <h4 class="font-semibold text-foreground group-hover:text-white mb-2">
                                            {*title}
                                        </h4>
                                        <p class="text-sm text-muted group-hover:text-white/80">
                                            {*desc}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="text-center mt-16">
                    <div class="inline-flex items-center gap-4 card-elegant p-6 rounded-2xl">
                        <span class="text-4xl">"🎯"</span>
                        <div class="text-left">
                            <p class="font-semibold text-foreground">"Always Learning"</p>
                            <p class="text-sm text-muted">
                                "Staying updated with the latest technologies and best practices"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One bar. Sits at 0 until `revealed`, then fills after `delay`.
#[component]
fn SkillBarView(entry: SkillEntry, delay: Duration, revealed: Signal<bool>) -> impl IntoView {
    let bar = RwSignal::new(SkillBar::new(&entry, delay));

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            bar.try_update(SkillBar::fire);
        },
        delay.as_millis() as f64,
    );

    Effect::new(move |_| {
        if revealed.get() && bar.try_update(SkillBar::reveal).flatten().is_some() {
            start(());
        }
    });

    on_cleanup(move || {
        bar.try_update(SkillBar::cancel);
    });

    let style = move || {
        format!(
            "width: {}%; transition-duration: {FILL_TRANSITION_MS}ms",
            bar.with(SkillBar::displayed)
        )
    };

    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="font-medium text-foreground">{entry.name}</span>
                <span class="text-sm text-muted">{format!("{}%", entry.percentage)}</span>
            </div>
            <div class="relative h-3 rounded-full bg-secondary overflow-hidden">
                <div
                    class="absolute top-0 left-0 h-3 bg-gradient-primary rounded-full transition-all ease-out"
                    style=style
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || bar.with(SkillBar::displayed).to_string()
                ></div>
            </div>
        </div>
    }
}

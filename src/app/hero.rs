use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::content::{
    HERO_STATS, HERO_TITLE, LOCATION, OWNER_FIRST_NAME, OWNER_LAST_NAME, RESUME_FILE_NAME,
    RESUME_PATH,
};
use crate::typewriter::{Typewriter, TYPE_INTERVAL};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-hero"
        >
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left animate-fade-up">
                        <div class="mb-6">
                            <p class="text-lg text-muted mb-2">"Hello, I'm"</p>
                            <h1 class="text-5xl md:text-7xl font-bold text-foreground mb-4">
                                {OWNER_FIRST_NAME}
                                <span class="hero-text-gradient block">{OWNER_LAST_NAME}</span>
                            </h1>
                            <div class="text-2xl md:text-3xl font-semibold h-12">
                                <TypedTitle text=HERO_TITLE />
                            </div>
                        </div>
                        <div class="mb-8 space-y-2 text-lg text-muted">
                            <p class="flex items-center justify-center lg:justify-start gap-2">
                                "📍 " {LOCATION}
                            </p>
                            <p>"3+ Years of Experience"</p>
                            <p>"Specialized in React.js & Modern Web Development"</p>
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <a
                                href="#about"
                                class="btn-gradient px-8 py-4 text-lg font-semibold rounded-xl hover:scale-105 transition-transform duration-200"
                            >
                                "View My Work"
                            </a>
                            <a
                                href=RESUME_PATH
                                download=RESUME_FILE_NAME
                                class="btn-outline-gradient flex items-center gap-2 px-8 py-4 text-lg font-semibold rounded-xl hover:scale-105 transition-transform duration-200"
                            >
                                "⬇ Download CV"
                            </a>
                        </div>
                        <div class="grid grid-cols-3 gap-6 mt-12 pt-8 border-t border-muted/50">
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-3xl font-bold hero-text-gradient">
                                                {stat.value}
                                            </div>
                                            <p class="text-sm text-muted">{stat.label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative lg:animate-fade-up">
                        <div class="w-80 h-80 mx-auto relative">
                            <div class="absolute inset-0 bg-gradient-primary rounded-3xl rotate-6 animate-glow-pulse"></div>
                            <img
                                src="/images/portrait.jpg"
                                alt=format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME} - {HERO_TITLE}")
                                class="relative z-10 w-full h-full object-cover rounded-3xl shadow-large"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Types `text` out one character per tick, then stops for good.
#[component]
fn TypedTitle(text: &'static str) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(text));

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            typewriter.try_update(Typewriter::tick);
        },
        TYPE_INTERVAL.as_millis() as u64,
    );

    // done is terminal, so the interval is never resumed
    Effect::new(move |_| {
        if typewriter.with(Typewriter::is_done) {
            pause();
        }
    });

    on_cleanup(move || {
        typewriter.try_update(Typewriter::cancel);
    });

    view! {
        <span class="border-r-4 border-primary pr-1 animate-blink">
            {move || typewriter.with(|t| t.displayed().to_string())}
        </span>
    }
}

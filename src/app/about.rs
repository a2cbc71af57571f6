use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{CERTIFICATIONS, HIGHLIGHTS, LOCATION, PHONE};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-gradient-subtle">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    lead="About"
                    accent="Me"
                    subtitle="Passionate Front-End Developer with expertise in creating exceptional user experiences"
                />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="animate-slide-right">
                        <Summary />
                        <div class="card-elegant p-6 mt-6">
                            <h4 class="text-lg font-bold text-foreground mb-4">
                                "Certifications & Education"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {CERTIFICATIONS
                                    .iter()
                                    .map(|cert| {
                                        view! {
                                            <span class="px-3 py-2 rounded-md text-sm bg-secondary">
                                                {*cert}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-foreground mb-8">"What I Bring"</h3>
                        <div class="grid sm:grid-cols-2 gap-6">
                            {HIGHLIGHTS
                                .iter()
                                .enumerate()
                                .map(|(i, h)| {
                                    view! {
                                        <div
                                            class="card-elegant card-hover p-6 animate-fade-up"
                                            style=format!("animation-delay: {}ms", i * 100)
                                        >
                                            <div class="text-3xl mb-4">{h.icon}</div>
                                            <h4 class="font-bold text-foreground mb-2">{h.title}</h4>
                                            <p class="text-sm text-muted">{h.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="card-elegant p-6 mt-8 bg-gradient-primary text-white">
                            <p class="leading-relaxed">
                                "When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, or designing user interfaces that make people's lives easier and more enjoyable!"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Summary() -> impl IntoView {
    view! {
        <div class="card-elegant p-8">
            <h3 class="text-2xl font-bold text-foreground mb-6">"Professional Summary"</h3>
            <div class="space-y-4 text-muted leading-relaxed">
                <p>
                    "I'm a dedicated " <strong class="text-primary">"Front-End Developer"</strong>
                    " with over " <strong class="text-primary">"3+ years of experience"</strong>
                    " building scalable, responsive web and mobile applications using React.js, JavaScript, HTML5, and CSS3."
                </p>
                <p>
                    "My expertise lies in creating reusable components, improving user experience, and optimizing UI performance. I have consistently delivered projects with "
                    <strong class="text-accent">"30–40% faster load times"</strong>
                    ", making applications more efficient and user-friendly."
                </p>
                <p>
                    "Beyond development, I am passionate about turning ideas into real projects. I'm exploring opportunities in AI-driven solutions and small-scale ventures, and I enjoy collaborating with like-minded individuals to build innovative products that solve real-world problems."
                </p>
                <p>
                    "I excel at cross-functional collaboration, API integration, and version control via Git/GitHub. With a strong understanding of UI/UX best practices, I thrive in Agile/Scrum environments and am committed to delivering clean, maintainable code that aligns with both technical and business goals."
                </p>
            </div>
            <div class="mt-8 pt-6 border-t border-muted/30">
                <div class="grid grid-cols-2 gap-4 text-sm">
                    <div>
                        <p class="font-semibold text-foreground">"Location"</p>
                        <p class="text-muted">{LOCATION}</p>
                    </div>
                    <div>
                        <p class="font-semibold text-foreground">"Phone"</p>
                        <p class="text-muted">{PHONE}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

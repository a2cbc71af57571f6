use async_trait::async_trait;
use chrono::Datelike;
use leptos::{either::Either, ev::SubmitEvent, prelude::*, server_fn::codec::Json, task::spawn_local};

use super::SectionHeader;
use crate::contact::{
    deliver, ContactField, ContactForm, ContactPayload, MailRelay, RelayError, SubmitStatus,
};
use crate::content::{
    CONTACT_INFO, EMAIL, OWNER_FIRST_NAME, OWNER_LAST_NAME, RESUME_FILE_NAME, RESUME_PATH,
    SOCIAL_LINKS,
};

#[server(input = Json)]
pub async fn send_contact_message(payload: ContactPayload) -> Result<(), ServerFnError> {
    use crate::relay::{EmailJsRelay, RelayConfig};
    use std::sync::LazyLock;

    static RELAY: LazyLock<EmailJsRelay> =
        LazyLock::new(|| EmailJsRelay::new(RelayConfig::from_env()));

    deliver(&*RELAY, payload)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Browser-side relay: forwards to the server function.
struct ServerFnRelay;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MailRelay for ServerFnRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        send_contact_message(payload.clone())
            .await
            .map_err(|e| RelayError::Server(e.to_string()))
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-gradient-subtle">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    lead="Get In"
                    accent="Touch"
                    subtitle="Ready to collaborate? Let's discuss your project and bring your ideas to life"
                />
                <div class="grid lg:grid-cols-3 gap-12">
                    <div class="lg:col-span-1 space-y-8">
                        <QuickActions />
                        <ContactDetails />
                        <SocialLinks />
                        <Availability />
                    </div>
                    <div class="lg:col-span-2">
                        <div class="card-elegant p-8 animate-fade-up">
                            <h3 class="text-2xl font-bold text-foreground mb-6">
                                "Send Me a Message"
                            </h3>
                            <ContactFormView />
                            <div class="mt-8 pt-6 border-t border-muted/30">
                                <p class="text-sm text-muted text-center">
                                    "Prefer email? Reach me directly at "
                                    <a
                                        href=format!("mailto:{EMAIL}")
                                        class="text-primary hover:underline font-medium"
                                    >
                                        {EMAIL}
                                    </a>
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
                <Footer />
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let res = deliver(&ServerFnRelay, payload).await;
            form.try_update(|f| f.finish(res));
        });
    };

    let status = move || form.with(ContactForm::status);

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid md:grid-cols-2 gap-6">
                <FormField field=ContactField::Name form />
                <FormField field=ContactField::Email form />
            </div>
            <FormField field=ContactField::Subject form />
            <FormField field=ContactField::Message form />
            <button
                type="submit"
                disabled=move || status() == SubmitStatus::Submitting
                class="btn-gradient w-full py-4 text-lg font-semibold rounded-md flex items-center justify-center gap-2 disabled:opacity-60"
            >
                {move || {
                    if status() == SubmitStatus::Submitting {
                        Either::Left(
                            view! {
                                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                                "Sending Message..."
                            },
                        )
                    } else {
                        Either::Right(view! { "➤ Send Message" })
                    }
                }}
            </button>
            {move || match status() {
                SubmitStatus::Sent => {
                    Some(
                        view! {
                            <p class="text-sm text-success text-center" role="status">
                                "Thanks! Your message has been sent."
                            </p>
                        }
                            .into_any(),
                    )
                }
                SubmitStatus::Failed => {
                    Some(
                        view! {
                            <p class="text-sm text-destructive text-center" role="alert">
                                "Your message couldn't be sent. Please email me directly."
                            </p>
                        }
                            .into_any(),
                    )
                }
                SubmitStatus::Idle | SubmitStatus::Submitting => None,
            }}
        </form>
    }
}

/// Every input goes through the same update path, keyed by `field`.
#[component]
fn FormField(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |value: String| form.update(|f| f.set(field, value));
    let class = "w-full px-4 py-2 rounded-md border border-muted bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-foreground mb-2">
                {field.label()}
            </label>
            {match field.input_type() {
                Some(ty) => {
                    Either::Left(
                        view! {
                            <input
                                id=field.name()
                                name=field.name()
                                type=ty
                                required=true
                                placeholder=field.placeholder()
                                prop:value=value
                                on:input=move |ev| on_input(event_target_value(&ev))
                                class=class
                            />
                        },
                    )
                }
                None => {
                    Either::Right(
                        view! {
                            <textarea
                                id=field.name()
                                name=field.name()
                                required=true
                                rows="6"
                                placeholder=field.placeholder()
                                prop:value=value
                                on:input=move |ev| on_input(event_target_value(&ev))
                                class=format!("{class} resize-none")
                            ></textarea>
                        },
                    )
                }
            }}
        </div>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    view! {
        <div class="card-elegant p-6 bg-gradient-primary text-white">
            <h3 class="text-xl font-bold mb-4">"💬 Let's Connect"</h3>
            <p class="mb-6 opacity-90">
                "Available for freelance projects and full-time opportunities"
            </p>
            <div class="flex flex-col gap-3">
                <a
                    href=format!("mailto:{EMAIL}")
                    class="flex items-center gap-2 px-4 py-2 rounded-md bg-white text-primary hover:bg-white/90"
                >
                    "✉️ Send Email"
                </a>
                <a
                    href=RESUME_PATH
                    download=RESUME_FILE_NAME
                    class="flex items-center gap-2 px-4 py-2 rounded-md text-white hover:bg-white/20"
                >
                    "⬇ Download Resume"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="space-y-4">
            {CONTACT_INFO
                .iter()
                .enumerate()
                .map(|(i, info)| {
                    let external = info.is_external();
                    view! {
                        <div
                            class="card-elegant card-hover p-4 animate-fade-up"
                            style=format!("animation-delay: {}ms", i * 100)
                        >
                            <a
                                href=info.href
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                                class="flex items-start gap-4 group"
                            >
                                <div class="flex-shrink-0 w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center group-hover:bg-primary/20 transition-colors duration-300">
                                    {info.icon}
                                </div>
                                <div>
                                    <h4 class="font-semibold text-foreground group-hover:text-primary transition-colors">
                                        {info.label}
                                    </h4>
                                    <p class="text-foreground font-medium">{info.value}</p>
                                    <p class="text-sm text-muted">{info.description}</p>
                                </div>
                            </a>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="card-elegant p-6">
            <h3 class="text-lg font-bold text-foreground mb-4">"Follow Me"</h3>
            <div class="space-y-3">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-3 p-3 rounded-lg hover:bg-primary/10 transition-colors group"
                                aria-label=format!("{} Profile", link.label)
                            >
                                <i class=format!(
                                    "{} text-xl text-muted group-hover:text-primary",
                                    link.icon_class,
                                )></i>
                                <div>
                                    <p class="font-medium text-foreground group-hover:text-primary transition-colors">
                                        {link.label}
                                    </p>
                                    <p class="text-sm text-muted">{link.description}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Availability() -> impl IntoView {
    view! {
        <div class="card-elegant p-6 border border-success/50">
            <div class="flex items-center gap-3 mb-3">
                <div class="w-3 h-3 bg-success rounded-full animate-pulse"></div>
                <h3 class="text-lg font-bold text-foreground">"Available for Work"</h3>
            </div>
            <div class="space-y-2 text-sm text-muted">
                <p>"🕒 Response time: Within 24 hours"</p>
                <p>"✅ Open to new opportunities"</p>
            </div>
        </div>
    }
}

fn build_year() -> Option<i32> {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
fn Footer() -> impl IntoView {
    let year = build_year().map(|y| format!("{y} ")).unwrap_or_default();
    view! {
        <footer class="text-center mt-16 pt-8 border-t border-muted/30">
            <p class="text-muted">
                {format!(
                    "© {year}{OWNER_FIRST_NAME} {OWNER_LAST_NAME}. Built with Rust, Leptos & Tailwind CSS",
                )}
            </p>
        </footer>
    }
}

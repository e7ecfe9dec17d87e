use leptos::{either::Either, prelude::*, task::spawn_local};

use super::reveal::Reveal;
use crate::contact::{
    ContactConfig, Field, FormEvent, FormRelayClient, FormState, SubmissionStatus, Submitter,
};
use crate::content::CONTACT_INFO;

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let config = StoredValue::new(ContactConfig::default());

    view! {
        <Reveal id="contact" class="py-16 px-4 bg-brightBlack/10">
            <div class="max-w-6xl mx-auto">
                <header class="text-center mb-8">
                    <h2 class="font-bold text-3xl mb-4">"Get In Touch"</h2>
                    <p class="text-lg text-muted">
                        "Have a project in mind or want to collaborate? I'd love to hear from you!"
                    </p>
                </header>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <ContactDetails />
                    <div class="p-6 rounded-lg border border-muted/30 bg-background">
                        <form
                            novalidate=true
                            on:submit=move |ev| {
                                ev.prevent_default();
                                let request = form.try_update(|f| f.apply(FormEvent::Submit)).flatten();
                                let Some(request) = request else {
                                    return;
                                };
                                let config = config.get_value();
                                spawn_local(async move {
                                    let client = FormRelayClient::new(&config);
                                    let outcome = client.submit(&request).await;
                                    form.update(|f| {
                                        f.apply(FormEvent::Resolved(outcome));
                                    });
                                });
                            }
                        >
                            <FormRow form field=Field::Name label="Name *" placeholder="Your Name" />
                            <FormRow
                                form
                                field=Field::Email
                                label="Email *"
                                placeholder="your.email@example.com"
                            />
                            <FormRow
                                form
                                field=Field::Subject
                                label="Subject *"
                                placeholder="Project Inquiry"
                            />
                            <FormRow
                                form
                                field=Field::Message
                                label="Message *"
                                placeholder="Tell me about your project..."
                                multiline=true
                            />
                            {move || {
                                form.with(|f| {
                                    f.status_message()
                                        .map(|msg| {
                                            let class = if f.status == SubmissionStatus::Success {
                                                "mb-4 p-3 rounded-md bg-green/20 text-green"
                                            } else {
                                                "mb-4 p-3 rounded-md bg-red/20 text-red"
                                            };
                                            view! {
                                                <div class=class role="status">
                                                    {msg}
                                                </div>
                                            }
                                        })
                                })
                            }}
                            <button
                                type="submit"
                                class="w-full px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200 disabled:opacity-50"
                                disabled=move || form.with(FormState::is_loading)
                                aria-busy=move || form.with(FormState::is_loading).to_string()
                            >
                                {move || {
                                    if form.with(FormState::is_loading) {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                        </form>
                        <p class="mt-4 text-sm text-muted text-center">
                            "Powered by "
                            <a href="https://formspree.io" target="_blank" rel="noreferrer" class="text-cyan">
                                "Formspree"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-bold mb-2">"Let's Connect"</h3>
            <p class="mb-6">
                "I'm always interested in hearing about new projects and opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
            </p>
            <div class="space-y-4 mb-6">
                {CONTACT_INFO
                    .iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href.unwrap_or("#")
                                class="flex items-center gap-4 p-3 rounded-md hover:bg-brightBlack/30"
                            >
                                <i class=format!("{} text-2xl text-cyan", item.icon) />
                                <div>
                                    <div class="text-sm text-muted">{item.label}</div>
                                    <div>{item.value}</div>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="p-4 rounded-md border-l-4 border-purple bg-brightBlack/30">
                <h4 class="font-medium text-purple mb-1">"Response Time"</h4>
                <p class="text-sm">"I typically respond within 24–48 hours during business days."</p>
                <small class="text-muted">
                    "For urgent matters, please mention it in your message subject."
                </small>
            </div>
        </div>
    }
}

#[component]
fn FormRow(
    form: RwSignal<FormState>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let error = move || form.with(|f| f.errors.get(field));
    let class = move || {
        let border = if error().is_some() { "border-red" } else { "border-muted" };
        format!("w-full px-4 py-2 rounded-md border {border} bg-background focus:outline-none focus:ring-2 focus:ring-cyan")
    };

    let control = if multiline {
        Either::Left(view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="6"
                placeholder=placeholder
                class=class
                prop:value=value
                on:input=move |ev| {
                    form.update(|f| {
                        f.apply(FormEvent::Edit(field, event_target_value(&ev)));
                    })
                }
            />
        })
    } else {
        Either::Right(view! {
            <input
                id=field.as_str()
                name=field.as_str()
                placeholder=placeholder
                class=class
                prop:value=value
                on:input=move |ev| {
                    form.update(|f| {
                        f.apply(FormEvent::Edit(field, event_target_value(&ev)));
                    })
                }
            />
        })
    };

    view! {
        <div class="mb-4">
            <label for=field.as_str() class="block font-medium mb-1">
                {label}
            </label>
            {control}
            {move || error().map(|e| view! { <div class="mt-1 text-sm text-red">{e.to_string()}</div> })}
        </div>
    }
}

use chrono::Local;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::toaster::ToastHandle;
use crate::contact::{ContactForm, Field};
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use crate::relay::{submit, EmailJsClient};

const INPUT_CLASS: &str = "w-full h-14 px-4 bg-muted/50 rounded-xl border border-border focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            name=field.as_str()
            placeholder=placeholder
            class=INPUT_CLASS
            prop:value=move || form.with(|f| f.value(field).to_string())
            on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let toaster = expect_context::<ToastHandle>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin_submit(Local::now())) {
            Some(Ok(request)) => spawn_local(async move {
                let relay = EmailJsClient::default();
                let result = submit(&relay, &request).await;
                form.try_update(|f| f.notify(&result, &toaster));
            }),
            Some(Err(e)) => form.with_untracked(|f| f.notify_rejected(&e, &toaster)),
            None => {}
        }
    };

    view! {
        <section id="contact" class="py-24 md:py-32 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Let’s " <span class="text-gradient">"Connect"</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Have a project in mind? Let’s build something meaningful together."
                    </p>
                </div>
                <div class="grid lg:grid-cols-5 gap-12 max-w-6xl mx-auto">
                    <div class="lg:col-span-2 space-y-8">
                        <div class="space-y-6">
                            {CONTACT_INFO
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div>
                                            <div class="text-sm text-muted-foreground">{*label}</div>
                                            <div class="font-medium">{*value}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="pt-6">
                            <h4 class="text-sm text-muted-foreground mb-4">"Follow me on"</h4>
                            <div class="flex gap-3">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label
                                                class="w-11 h-11 rounded-full bg-card border border-border flex items-center justify-center hover:border-primary hover:-translate-y-1 transition"
                                            >
                                                <i class=social.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <form
                        class="lg:col-span-3 bg-card rounded-3xl p-8 shadow-card space-y-6"
                        on:submit=on_submit
                    >
                        <div class="grid sm:grid-cols-2 gap-6">
                            <FormInput form field=Field::Name placeholder="Your Name" />
                            <FormInput
                                form
                                field=Field::Email
                                placeholder="Email Address"
                                input_type="email"
                            />
                        </div>
                        <FormInput form field=Field::Subject placeholder="Subject" />
                        <textarea
                            name=Field::Message.as_str()
                            rows="5"
                            placeholder="Your Message"
                            class="w-full p-4 bg-muted/50 rounded-xl border border-border resize-none focus:outline-none focus:ring-2 focus:ring-primary"
                            prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                            on:input=move |ev| {
                                form.update(|f| f.update_field(Field::Message, event_target_value(&ev)))
                            }
                        />
                        <button
                            type="submit"
                            disabled=move || form.with(ContactForm::is_submitting)
                            class="w-full h-14 bg-gradient-primary rounded-xl text-lg font-semibold text-white disabled:opacity-60"
                        >
                            {move || {
                                if form.with(ContactForm::is_submitting) {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

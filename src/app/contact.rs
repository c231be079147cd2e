use leptos::{either::Either, prelude::*};

use crate::contact::{ContactDraft, ContactError, ContactField, ACKNOWLEDGMENT};
use crate::content::{EMAIL, LOCATION};

use super::reveal::{Reveal, SectionTitle};

#[component]
pub fn Contact() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let error = RwSignal::new(None::<ContactError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.try_update(ContactDraft::submit) {
            Some(Ok(submission)) => {
                error.set(None);
                match serde_json::to_string(&submission) {
                    Ok(json) => log::info!("contact submission: {json}"),
                    Err(e) => log::warn!("could not serialize contact submission: {e}"),
                }
                if window().alert_with_message(ACKNOWLEDGMENT).is_err() {
                    log::warn!("alert unavailable");
                }
            }
            Some(Err(e)) => {
                log::debug!("contact form rejected: {e}");
                error.set(Some(e));
            }
            None => {}
        }
    };

    view! {
        <section id="contact" class="mt-24 md:mt-32 mb-16 grid md:grid-cols-[0.9fr_1.1fr] gap-10">
            <Reveal class="space-y-5">
                <SectionTitle
                    eyebrow="Contact"
                    title="Let's build something bold."
                    kicker="Tell me about the product, the timeline and what success looks like."
                />
                <div class="space-y-2 text-sm text-white/70">
                    <p>
                        "Email: "
                        <a href=format!("mailto:{EMAIL}") class="text-white hover:text-accent2">
                            {EMAIL}
                        </a>
                    </p>
                    <p>"Based in " {LOCATION} ", working remotely worldwide."</p>
                </div>
            </Reveal>

            <Reveal index=1>
                <form
                    class="glass rounded-3xl p-6 md:p-8 border border-white/10 space-y-4"
                    novalidate
                    on:submit=on_submit
                >
                    <div class="grid sm:grid-cols-2 gap-4">
                        <Field field=ContactField::Name draft error />
                        <Field field=ContactField::Email draft error />
                    </div>
                    <Field field=ContactField::Project draft error />
                    <Field field=ContactField::Message draft error />
                    <button type="submit" class="btn-primary w-full justify-center">
                        "Send message"
                    </button>
                </form>
            </Reveal>
        </section>
    }
}

/// One labelled input bound to a draft field.
///
/// Once the form has been rejected, every edit re-runs the required check so
/// the inline messages clear as fields are filled.
#[component]
fn Field(
    field: ContactField,
    draft: RwSignal<ContactDraft>,
    error: RwSignal<Option<ContactError>>,
) -> impl IntoView {
    let value = move || draft.with(|d| d.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        draft.update(|d| d.set(field, event_target_value(&ev)));
        if error.with_untracked(Option::is_some) {
            error.set(draft.with_untracked(|d| d.validate().err()));
        }
    };
    let missing = move || error.with(|e| e.as_ref().is_some_and(|e| e.is_missing(field)));
    let input_class = move || {
        if missing() {
            "w-full rounded-xl bg-white/5 border border-rose-400/70 px-4 py-3 text-white placeholder:text-white/40 focus:outline-none focus:border-accent"
        } else {
            "w-full rounded-xl bg-white/5 border border-white/10 px-4 py-3 text-white placeholder:text-white/40 focus:outline-none focus:border-accent"
        }
    };
    let placeholder = match field {
        ContactField::Name => "Your name",
        ContactField::Email => "you@company.com",
        ContactField::Project => "Launch, redesign, dashboard...",
        ContactField::Message => "What are you building?",
    };

    let control = match field {
        ContactField::Message => Either::Left(view! {
            <textarea
                rows=5
                name=field.label()
                class=input_class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }),
        _ => Either::Right(view! {
            <input
                type=if field == ContactField::Email { "email" } else { "text" }
                name=field.label()
                class=input_class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }),
    };

    view! {
        <label class="block space-y-2 text-sm text-white/70">
            <span>
                {field.label()}
                {(!field.is_required()).then_some(" (optional)")}
            </span>
            {control}
            <Show when=missing>
                <span class="block text-xs text-rose-300">{format!("{} is required", field.label())}</span>
            </Show>
        </label>
    }
}

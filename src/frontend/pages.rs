use gloo_timers::future::TimeoutFuture;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use super::content::{
    LegalSection, Pillar, ABOUT_ACCENT, ABOUT_BADGE, ABOUT_DESCRIPTION, ABOUT_MISSION,
    ABOUT_MISSION_AUTHOR, ABOUT_STATS, ABOUT_TITLE, BENEFITS, CAREERS_ACCENT, CAREERS_BADGE,
    CAREERS_DESCRIPTION, CAREERS_TITLE, CONTACT_ACCENT, CONTACT_BADGE, CONTACT_DESCRIPTION,
    CONTACT_EMAIL, CONTACT_SUCCESS_MESSAGE, CONTACT_SUCCESS_TITLE, CONTACT_TITLE, CULTURE,
    MILESTONES, OFFICES, POSITIONS, PRIVACY_SECTIONS, PRIVACY_UPDATED, SOCIAL, TEAM,
    TERMS_SECTIONS, VALUES,
};
use super::widgets::{AnimatedSection, PageHero, StatCounter};
use crate::contact::{
    ContactForm, Field, FieldErrors, Reason, Submission, COMPANY_MAX_CHARS, MESSAGE_MAX_CHARS,
    NAME_MAX_CHARS, SIMULATED_LATENCY_MS,
};
use crate::logging::{log_event, LogLevel};
use crate::motion::parallax::Variant;
use crate::routes::Route;

fn pillar_grid(items: &'static [Pillar]) -> Html {
    html! {
        <div class="pillar-grid">
            { for items.iter().enumerate().map(|(index, pillar)| html! {
                <AnimatedSection key={pillar.title} delay={index as f64 * 0.1} class={classes!("glass-card", "pillar")}>
                    <span class="pillar-icon" aria-hidden="true">{pillar.icon}</span>
                    <h3>{pillar.title}</h3>
                    <p>{pillar.description}</p>
                </AnimatedSection>
            }) }
        </div>
    }
}

#[function_component(AboutPage)]
pub(crate) fn about_page() -> Html {
    html! {
        <div class="page about">
            <PageHero badge={ABOUT_BADGE} title={ABOUT_TITLE} accent={AttrValue::from(ABOUT_ACCENT)} description={ABOUT_DESCRIPTION} />

            <section class="section mission">
                <AnimatedSection variant={Variant::ScaleIn} class={classes!("glass", "mission-card")}>
                    <blockquote>{ABOUT_MISSION}</blockquote>
                    <cite>{ABOUT_MISSION_AUTHOR}</cite>
                </AnimatedSection>
            </section>

            <section class="section values" aria-labelledby="values-heading">
                <h2 id="values-heading" class="section-title">{"Core Directives"}</h2>
                {pillar_grid(&VALUES)}
            </section>

            <section class="section stats-band">
                <div class="stats">
                    { for ABOUT_STATS.iter().map(|stat| html! {
                        <StatCounter key={stat.label} value={stat.value} label={stat.label} highlight={stat.highlight} />
                    }) }
                </div>
            </section>

            <section class="section team" aria-labelledby="team-heading">
                <h2 id="team-heading" class="section-title">{"The Architects"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| {
                        let variant = if index % 2 == 0 { Variant::SlideLeft } else { Variant::SlideRight };
                        html! {
                            <AnimatedSection key={member.name} variant={variant} delay={index as f64 * 0.1} class={classes!("glass-card", "team-member")}>
                                <h3>{member.name}</h3>
                                <span class="team-role">{member.role}</span>
                                <p>{member.bio}</p>
                            </AnimatedSection>
                        }
                    }) }
                </div>
            </section>

            <section class="section timeline" aria-labelledby="timeline-heading">
                <h2 id="timeline-heading" class="section-title">{"Training Log"}</h2>
                <ol class="milestones">
                    { for MILESTONES.iter().map(|milestone| html! {
                        <li key={milestone.year}>
                            <AnimatedSection variant={Variant::FadeIn}>
                                <span class="milestone-year">{milestone.year}</span>
                                <p>{milestone.event}</p>
                            </AnimatedSection>
                        </li>
                    }) }
                </ol>
            </section>
        </div>
    }
}

#[function_component(CareersPage)]
pub(crate) fn careers_page() -> Html {
    html! {
        <div class="page careers">
            <PageHero badge={CAREERS_BADGE} title={CAREERS_TITLE} accent={AttrValue::from(CAREERS_ACCENT)} description={CAREERS_DESCRIPTION} />

            <section class="section culture" aria-labelledby="culture-heading">
                <h2 id="culture-heading" class="section-title">{"How We Work"}</h2>
                {pillar_grid(&CULTURE)}
            </section>

            <section class="section benefits" aria-labelledby="benefits-heading">
                <h2 id="benefits-heading" class="section-title">{"Benefits"}</h2>
                {pillar_grid(&BENEFITS)}
            </section>

            <section class="section positions" aria-labelledby="positions-heading">
                <h2 id="positions-heading" class="section-title">{"Open Positions"}</h2>
                <ul class="position-list">
                    { for POSITIONS.iter().enumerate().map(|(index, position)| html! {
                        <li key={position.title}>
                            <AnimatedSection delay={index as f64 * 0.1} class={classes!("glass-card", "position")}>
                                <div class="position-meta">
                                    <span>{position.department}</span>
                                    <span>{position.location}</span>
                                </div>
                                <h3>{position.title}</h3>
                                <p>{position.description}</p>
                                <Link<Route> to={Route::Contact} classes={classes!("button-ghost")}>
                                    {"Apply"}
                                </Link<Route>>
                            </AnimatedSection>
                        </li>
                    }) }
                </ul>
                <p class="positions-note">
                    {"Don't see your role? Write to "}
                    <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                </p>
            </section>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormStatus {
    Editing,
    Sending,
    Sent,
}

/// Callback that writes one field of the form and clears its inline error.
fn field_setter(
    form: &UseStateHandle<ContactForm>,
    errors: &UseStateHandle<FieldErrors>,
    field: Option<Field>,
    apply: fn(&mut ContactForm, String),
) -> Callback<String> {
    let form = form.clone();
    let errors = errors.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);

        if let Some(field) = field {
            if errors.get(field).is_some() {
                let mut remaining = (*errors).clone();
                remaining.clear(field);
                errors.set(remaining);
            }
        }
    })
}

fn input_value(event: InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

fn error_text(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(error) => html! {
            <span class="field-error" id={format!("{field}-error").to_lowercase()} role="alert">
                {error.to_string()}
            </span>
        },
        None => Html::default(),
    }
}

#[function_component(ContactPage)]
pub(crate) fn contact_page() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::default);
    let status = use_state(|| FormStatus::Editing);

    let on_name = field_setter(&form, &errors, Some(Field::Name), |form, value| form.name = value)
        .reform(input_value);
    let on_email = field_setter(&form, &errors, Some(Field::Email), |form, value| form.email = value)
        .reform(input_value);
    let on_company = field_setter(&form, &errors, Some(Field::Company), |form, value| form.company = value)
        .reform(input_value);
    let on_website = field_setter(&form, &errors, None, |form, value| form.website = value)
        .reform(input_value);
    let on_message = field_setter(&form, &errors, Some(Field::Message), |form, value| form.message = value)
        .reform(|event: InputEvent| event.target_unchecked_into::<HtmlTextAreaElement>().value());
    let on_reason = field_setter(&form, &errors, None, |form, value| {
        if let Some(reason) = Reason::parse(&value) {
            form.reason = reason;
        }
    })
    .reform(|event: Event| event.target_unchecked_into::<HtmlSelectElement>().value());

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *status != FormStatus::Editing {
                return;
            }

            let submission = match form.submit() {
                Ok(submission) => submission,
                Err(found) => {
                    log_event(
                        LogLevel::Debug,
                        "contact.rejected",
                        json!({ "errors": found.len() }),
                    );
                    errors.set(found);
                    return;
                }
            };

            errors.set(FieldErrors::default());
            status.set(FormStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
                match submission {
                    Submission::Dispatch(payload) => log_event(
                        LogLevel::Info,
                        "contact.dispatched",
                        json!({
                            "reason": payload.reason,
                            "hasCompany": !payload.company.is_empty(),
                            "messageChars": payload.message.chars().count(),
                        }),
                    ),
                    Submission::Discarded => {
                        log_event(LogLevel::Debug, "contact.discarded", json!({}))
                    }
                }
                form.set(ContactForm::default());
                status.set(FormStatus::Sent);
            });
        })
    };

    let send_another = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| status.set(FormStatus::Editing))
    };

    let sending = *status == FormStatus::Sending;
    let invalid = |field: Field| errors.get(field).is_some().to_string();

    html! {
        <div class="page contact">
            <PageHero badge={CONTACT_BADGE} title={CONTACT_TITLE} accent={AttrValue::from(CONTACT_ACCENT)} description={CONTACT_DESCRIPTION} />

            <section class="section contact-body">
                if *status == FormStatus::Sent {
                    <AnimatedSection variant={Variant::ScaleIn} class={classes!("glass", "contact-success")}>
                        <h2 role="status">{CONTACT_SUCCESS_TITLE}</h2>
                        <p>{CONTACT_SUCCESS_MESSAGE}</p>
                        <button type="button" class="button-ghost" onclick={send_another}>
                            {"Send another message"}
                        </button>
                    </AnimatedSection>
                } else {
                    <form class="glass contact-form" novalidate={true} onsubmit={onsubmit}>
                        <div class="field">
                            <label for="contact-name">{Field::Name.label()}</label>
                            <input
                                id="contact-name"
                                type="text"
                                autocomplete="name"
                                maxlength={NAME_MAX_CHARS.to_string()}
                                value={form.name.clone()}
                                aria-invalid={invalid(Field::Name)}
                                oninput={on_name}
                            />
                            {error_text(&errors, Field::Name)}
                        </div>
                        <div class="field">
                            <label for="contact-email">{Field::Email.label()}</label>
                            <input
                                id="contact-email"
                                type="email"
                                autocomplete="email"
                                value={form.email.clone()}
                                aria-invalid={invalid(Field::Email)}
                                oninput={on_email}
                            />
                            {error_text(&errors, Field::Email)}
                        </div>
                        <div class="field">
                            <label for="contact-company">{Field::Company.label()}</label>
                            <input
                                id="contact-company"
                                type="text"
                                autocomplete="organization"
                                maxlength={COMPANY_MAX_CHARS.to_string()}
                                value={form.company.clone()}
                                aria-invalid={invalid(Field::Company)}
                                oninput={on_company}
                            />
                            {error_text(&errors, Field::Company)}
                        </div>
                        <div class="field">
                            <label for="contact-reason">{"Reason"}</label>
                            <select id="contact-reason" onchange={on_reason}>
                                { for Reason::ALL.into_iter().map(|reason| html! {
                                    <option
                                        key={reason.as_str()}
                                        value={reason.as_str()}
                                        selected={reason == form.reason}
                                    >
                                        {reason.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label for="contact-message">{Field::Message.label()}</label>
                            <textarea
                                id="contact-message"
                                rows="6"
                                maxlength={MESSAGE_MAX_CHARS.to_string()}
                                value={form.message.clone()}
                                aria-invalid={invalid(Field::Message)}
                                oninput={on_message}
                            />
                            <span class="field-counter" aria-live="polite">
                                {format!("{}/{}", form.message.chars().count(), MESSAGE_MAX_CHARS)}
                            </span>
                            {error_text(&errors, Field::Message)}
                        </div>
                        <div class="field decoy" aria-hidden="true">
                            <label for="contact-website">{"Website"}</label>
                            <input
                                id="contact-website"
                                type="text"
                                tabindex="-1"
                                autocomplete="off"
                                value={form.website.clone()}
                                oninput={on_website}
                            />
                        </div>
                        <button type="submit" class="button-primary" disabled={sending}>
                            { if sending { "Transmitting..." } else { "Send Transmission" } }
                        </button>
                    </form>
                }

                <aside class="offices">
                    <h2 class="section-title">{"Nodes"}</h2>
                    { for OFFICES.iter().map(|office| html! {
                        <address key={office.city} class="glass-card office">
                            <strong>{office.city}</strong>
                            <span>{office.address}</span>
                            <span>{office.zip}</span>
                        </address>
                    }) }
                    <a class="contact-email" href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                </aside>
            </section>
        </div>
    }
}

fn legal_document(title: &'static str, updated: Option<&'static str>, sections: &'static [LegalSection]) -> Html {
    html! {
        <article class="page legal">
            <header class="page-hero">
                <h1 class="page-title">{title}</h1>
                if let Some(updated) = updated {
                    <p class="legal-updated">{format!("Last updated: {updated}")}</p>
                }
            </header>
            { for sections.iter().map(|section| html! {
                <section key={section.heading} class="legal-section">
                    <h2>{section.heading}</h2>
                    <p>{section.body}</p>
                </section>
            }) }
        </article>
    }
}

#[function_component(PrivacyPage)]
pub(crate) fn privacy_page() -> Html {
    legal_document("Privacy Policy", Some(PRIVACY_UPDATED), &PRIVACY_SECTIONS)
}

#[function_component(TermsPage)]
pub(crate) fn terms_page() -> Html {
    legal_document("Terms of Service", None, &TERMS_SECTIONS)
}

#[function_component(SocialPage)]
pub(crate) fn social_page() -> Html {
    html! {
        <div class="page social">
            <header class="page-hero">
                <h1 class="page-title">{"Social"}</h1>
                <p class="page-lede">{"Follow the signal."}</p>
            </header>
            <ul class="social-grid">
                { for SOCIAL.iter().enumerate().map(|(index, channel)| html! {
                    <li key={channel.name}>
                        <AnimatedSection delay={index as f64 * 0.1} class={classes!("glass-card", "social-card")}>
                            <a href={channel.href} target="_blank" rel="noopener noreferrer">
                                <strong>{channel.name}</strong>
                                <span>{channel.handle}</span>
                                <span class="sr-only">{" (opens in a new tab)"}</span>
                            </a>
                        </AnimatedSection>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <div class="page not-found">
            <h1 class="display">{"404"}</h1>
            <p class="page-lede">{"This signal does not resolve to any known node."}</p>
            <Link<Route> to={Route::Home} classes={classes!("button-primary")}>
                {"Return Home"}
            </Link<Route>>
        </div>
    }
}

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use super::content::{
    BRAND_NAME, CONTACT_EMAIL, DESCRIPTION, FOOTER_COMPANY, FOOTER_LEGAL, FOOTER_SERVICES,
    MAIN_NAV, SOCIAL, TAGLINE,
};
use super::effects::{use_motion, use_pointer, WakingLoop};
use super::widgets::AnchorLink;
use super::{log_storage_error, preference_store};
use crate::logging::{log_event, LogLevel};
use crate::motion::proximity::ProximityFollower;
use crate::preferences::{ConsentChoice, ConsentPrompt, Theme, CONSENT_KEY, CONSENT_REVEAL_DELAY_MS};
use crate::routes::{Route, SECTIONS};

const COMPASS_REACH: f64 = 64.0;
const CURSOR_STIFFNESS: f64 = 1_500.0;
const CURSOR_RADIUS: f64 = 16.0;
const HOVER_TARGETS: &str = "a, button, [data-hover='true']";

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
pub(crate) fn header(props: &HeaderProps) -> Html {
    let current = use_route::<Route>().unwrap_or(Route::NotFound);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", "glass", menu_open.then_some("menu-open"))}>
            <Link<Route> to={Route::Home} classes={classes!("brand")}>
                <span class="brand-mark" aria-hidden="true">{"◎"}</span>
                <span class="brand-name">{BRAND_NAME}</span>
            </Link<Route>>
            <nav class="site-nav" aria-label="Main">
                <ul>
                    { for MAIN_NAV.iter().map(|item| {
                        let route = Route::resolve(item.href);
                        html! {
                            <li key={item.href} onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={route}
                                    classes={classes!("nav-link", (route == current).then_some("is-active"))}
                                >
                                    {item.label}
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
            <div class="header-actions">
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed().to_string()}
                    onclick={props.on_toggle_theme.clone()}
                >
                    <span aria-hidden="true">{props.theme.icon()}</span>
                </button>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span class="menu-bar" aria-hidden="true" />
                    <span class="menu-bar" aria-hidden="true" />
                </button>
            </div>
        </header>
    }
}

#[function_component(Breadcrumbs)]
pub(crate) fn breadcrumbs() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::NotFound);
    let trail = current.breadcrumbs();
    let Some(last) = trail.len().checked_sub(1) else {
        return Html::default();
    };

    html! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol itemscope="" itemtype="https://schema.org/BreadcrumbList">
                { for trail.into_iter().enumerate().map(|(index, route)| html! {
                    <li
                        key={route.path()}
                        itemprop="itemListElement"
                        itemscope=""
                        itemtype="https://schema.org/ListItem"
                    >
                        if index > 0 {
                            <span class="breadcrumb-separator" aria-hidden="true">{"/"}</span>
                        }
                        if index == last {
                            <span itemprop="name" aria-current="page">{route.label()}</span>
                        } else {
                            <Link<Route> to={route}>
                                <span itemprop="name">{route.label()}</span>
                            </Link<Route>>
                        }
                        <meta itemprop="position" content={(index + 1).to_string()} />
                    </li>
                }) }
            </ol>
        </nav>
    }
}

/// Ring that trails the pointer on a spring and grows over links and
/// buttons. Not rendered under reduced motion.
#[function_component(GlassCursor)]
pub(crate) fn glass_cursor() -> Html {
    let motion = use_motion();
    let pointer = use_pointer();
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let hovering = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let hovering = hovering.clone();
        use_effect_with((motion, pointer), move |(motion, pointer)| {
            let driver = motion.allows_motion().then(|| {
                let hover = window().map(|win| {
                    EventListener::new(&win, "mouseover", move |event| {
                        let over = event
                            .target()
                            .and_then(|target| target.dyn_into::<Element>().ok())
                            .and_then(|element| element.closest(HOVER_TARGETS).ok().flatten())
                            .is_some();
                        hovering.set(over);
                    })
                });

                let pointer = pointer.clone();
                let mut follower = None::<ProximityFollower>;
                let frames = WakingLoop::start(move |dt| {
                    let Some(position) = pointer.latest() else {
                        visible.set(false);
                        follower = None;
                        return false;
                    };
                    visible.set(true);

                    let follower = follower.get_or_insert_with(|| {
                        let mut fresh = ProximityFollower::new(CURSOR_STIFFNESS);
                        fresh.snap(position);
                        fresh
                    });
                    follower.set_target(position);
                    let at = follower.step(dt);
                    if let Some(element) = node.cast::<Element>() {
                        let _ = element.set_attribute(
                            "style",
                            &format!(
                                "transform: translate3d({:.1}px, {:.1}px, 0);",
                                at.x - CURSOR_RADIUS,
                                at.y - CURSOR_RADIUS
                            ),
                        );
                    }
                    !follower.is_settled()
                });
                (hover, frames)
            });
            move || drop(driver)
        });
    }

    if motion.reduced() {
        return Html::default();
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "glass-cursor",
                visible.then_some("is-visible"),
                hovering.then_some("is-hovering")
            )}
            aria-hidden="true"
        >
            <div class="glass-cursor-ring">
                <span class="glass-cursor-dot" />
            </div>
        </div>
    }
}

fn set_flag<E>(state: &UseStateHandle<bool>, value: bool) -> Callback<E> {
    let state = state.clone();
    Callback::from(move |_| state.set(value))
}

/// Four-point navigator for the home sections. Collapsed to a hub until
/// hovered or focused; from other routes each point navigates home first.
#[function_component(CompassNav)]
pub(crate) fn compass_nav() -> Html {
    let expanded = use_state(|| false);
    let collapse = {
        let expanded = expanded.clone();
        Callback::from(move |()| expanded.set(false))
    };

    html! {
        <nav
            class={classes!("compass", expanded.then_some("is-expanded"))}
            aria-label="Sections"
            onmouseenter={set_flag(&expanded, true)}
            onmouseleave={set_flag(&expanded, false)}
            onfocusin={set_flag(&expanded, true)}
            onfocusout={set_flag(&expanded, false)}
        >
            <span class="compass-hub" aria-hidden="true" />
            { for SECTIONS.iter().map(|section| {
                let (x, y) = section.direction.unit();
                let reach = if *expanded { COMPASS_REACH } else { 0.0 };
                let style = format!("transform: translate({:.1}px, {:.1}px);", x * reach, y * reach);
                html! {
                    <AnchorLink
                        key={section.id}
                        href={format!("/#{}", section.id)}
                        class={classes!("compass-point")}
                        aria_label={AttrValue::from(section.label)}
                        on_follow={collapse.clone()}
                    >
                        <span class="compass-letter" style={style}>{section.direction.letter()}</span>
                        <span class="compass-label">{section.label}</span>
                    </AnchorLink>
                }
            }) }
        </nav>
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let columns = [
        ("Company", &FOOTER_COMPANY),
        ("Services", &FOOTER_SERVICES),
        ("Legal", &FOOTER_LEGAL),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="brand-name">{BRAND_NAME}</span>
                <p class="footer-tagline">{TAGLINE}</p>
                <p class="footer-description">{DESCRIPTION}</p>
                <a class="footer-email" href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
            </div>
            { for columns.into_iter().map(|(title, links)| html! {
                <div class="footer-column" key={title}>
                    <h3>{title}</h3>
                    <ul>
                        { for links.iter().map(|link| html! {
                            <li key={link.label}>
                                <AnchorLink href={link.href}>{link.label}</AnchorLink>
                            </li>
                        }) }
                    </ul>
                </div>
            }) }
            <ul class="footer-social">
                { for SOCIAL.iter().map(|channel| html! {
                    <li key={channel.name}>
                        <a href={channel.href} target="_blank" rel="noopener noreferrer">
                            {channel.name}
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                    </li>
                }) }
            </ul>
        </footer>
    }
}

/// Cookie banner. Appears after a short delay for visitors without a stored
/// choice and goes away for good once they pick one.
#[function_component(CookieConsent)]
pub(crate) fn cookie_consent() -> Html {
    let prompt = use_state(|| ConsentPrompt::new(preference_store().consent()));

    {
        let prompt = prompt.clone();
        use_effect_with((), move |_| {
            let mut scheduled = *prompt;
            let timer = scheduled.schedule().then(move || {
                prompt.set(scheduled);
                Timeout::new(CONSENT_REVEAL_DELAY_MS, move || {
                    let mut revealed = scheduled;
                    if revealed.reveal() {
                        prompt.set(revealed);
                    }
                })
            });
            move || drop(timer)
        });
    }

    if !prompt.is_visible() {
        return Html::default();
    }

    let update = |edit: fn(&mut ConsentPrompt)| {
        let prompt = prompt.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *prompt;
            edit(&mut next);
            prompt.set(next);
        })
    };
    let choose = |choice: ConsentChoice| {
        let prompt = prompt.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *prompt;
            let Some(record) = next.resolve(choice) else {
                return;
            };
            if let Err(err) = preference_store().set_consent(&record) {
                log_storage_error(CONSENT_KEY, &err);
            }
            log_event(
                LogLevel::Info,
                "consent.saved",
                json!({ "analytics": record.analytics, "marketing": record.marketing }),
            );
            prompt.set(next);
        })
    };
    let toggle = |edit: fn(&mut ConsentPrompt, bool)| {
        let prompt = prompt.clone();
        Callback::from(move |event: Event| {
            let checked = event.target_unchecked_into::<HtmlInputElement>().checked();
            let mut next = *prompt;
            edit(&mut next, checked);
            prompt.set(next);
        })
    };
    let draft = prompt.draft();

    html! {
        <aside class="cookie-consent glass" role="dialog" aria-live="polite" aria-label="Cookie preferences">
            if prompt.showing_preferences() {
                <div class="consent-preferences">
                    <h2 class="consent-title">{"Cookie Preferences"}</h2>
                    <label class="consent-option">
                        <input type="checkbox" checked={true} disabled={true} />
                        <span>{"Necessary"}</span>
                        <small>{"Required for the site to work. Always on."}</small>
                    </label>
                    <label class="consent-option">
                        <input
                            type="checkbox"
                            checked={draft.analytics}
                            onchange={toggle(ConsentPrompt::set_analytics)}
                        />
                        <span>{"Analytics"}</span>
                        <small>{"Helps us understand how the site is used."}</small>
                    </label>
                    <label class="consent-option">
                        <input
                            type="checkbox"
                            checked={draft.marketing}
                            onchange={toggle(ConsentPrompt::set_marketing)}
                        />
                        <span>{"Marketing"}</span>
                        <small>{"Lets us measure campaigns."}</small>
                    </label>
                    <div class="consent-actions">
                        <button type="button" class="button-ghost" onclick={update(ConsentPrompt::close_preferences)}>
                            {"Back"}
                        </button>
                        <button type="button" class="button-primary" onclick={choose(ConsentChoice::SaveCustom)}>
                            {"Save Preferences"}
                        </button>
                    </div>
                </div>
            } else {
                <div class="consent-summary">
                    <p>
                        {"We use cookies to keep the site working and, with your permission, to understand how it is used. "}
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    </p>
                    <div class="consent-actions">
                        <button type="button" class="button-ghost" onclick={update(ConsentPrompt::open_preferences)}>
                            {"Preferences"}
                        </button>
                        <button type="button" class="button-ghost" onclick={choose(ConsentChoice::NecessaryOnly)}>
                            {"Necessary Only"}
                        </button>
                        <button type="button" class="button-primary" onclick={choose(ConsentChoice::AcceptAll)}>
                            {"Accept All"}
                        </button>
                    </div>
                </div>
            }
        </aside>
    }
}

mod chrome;
mod content;
mod effects;
mod home;
mod pages;
mod smooth_scroll;
mod widgets;

use gloo_events::EventListener;
use js_sys::{Function, Reflect};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::logging::{log_event, LogLevel};
use crate::motion::proximity::PointerSignal;
use crate::motion::{MotionPreference, Vec2};
use crate::preferences::{KeyValueStorage, PreferenceStore, StorageError, Theme};
use crate::routes::Route;

use chrome::{Breadcrumbs, CompassNav, CookieConsent, Footer, GlassCursor, Header};
use smooth_scroll::SmoothScroll;

pub(crate) fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub(crate) struct WebStorage;

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

pub(crate) fn preference_store() -> PreferenceStore<WebStorage> {
    PreferenceStore::new(WebStorage)
}

/// Storage failures never reach the visitor; they only leave a debug line.
pub(crate) fn log_storage_error(key: &str, err: &StorageError) {
    log_event(
        LogLevel::Debug,
        "preferences.write_failed",
        json!({ "key": key, "error": err.to_string() }),
    );
}

fn media_matches(query: &str) -> Option<bool> {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
}

fn system_prefers_dark() -> Option<bool> {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

fn resolve_theme() -> Theme {
    Theme::resolve(preference_store().theme(), system_prefers_dark())
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn apply_theme_with_transition(theme: Theme, motion: MotionPreference) {
    if motion.reduced() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub(crate) fn scroll_to_section(id: &str, motion: MotionPreference) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if motion.reduced() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Latest pointer position in viewport coordinates, shared by every
/// proximity-reactive element. Written only by the root listener.
#[derive(Clone, Default)]
pub(crate) struct PointerTracker(Rc<Cell<Option<Vec2>>>);

impl PointerTracker {
    pub(crate) fn latest(&self) -> Option<Vec2> {
        self.0.get()
    }

    fn record(&self, signal: PointerSignal) {
        self.0.set(signal.apply(self.0.get()));
    }
}

impl PartialEq for PointerTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub(crate) fn element_center(element: &Element) -> Vec2 {
    let rect = element.get_bounding_client_rect();
    Vec2::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    )
}

#[derive(Properties, PartialEq)]
struct RouteEffectsProps {
    motion: MotionPreference,
}

/// Keeps the document title in step with the route and honours `#anchor`
/// links after a cross-route navigation.
#[function_component(RouteEffects)]
fn route_effects(props: &RouteEffectsProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let location = use_location();
    let hash = location
        .map(|location| location.hash().trim_start_matches('#').to_string())
        .unwrap_or_default();
    let motion = props.motion;

    use_effect_with((route, hash), move |(route, hash)| {
        if let Some(document) = window().and_then(|w| w.document()) {
            document.set_title(route.title());
        }

        let scrolled = !hash.is_empty() && scroll_to_section(hash, motion);
        if !scrolled {
            if let Some(win) = window() {
                win.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
        log_event(
            LogLevel::Debug,
            "route.entered",
            json!({ "path": route.path(), "anchor": hash }),
        );
        || ()
    });

    Html::default()
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <home::HomePage /> },
        Route::About => html! { <pages::AboutPage /> },
        Route::Careers => html! { <pages::CareersPage /> },
        Route::Contact => html! { <pages::ContactPage /> },
        Route::Privacy => html! { <pages::PrivacyPage /> },
        Route::Terms => html! { <pages::TermsPage /> },
        Route::Social => html! { <pages::SocialPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let motion = use_memo((), |_| MotionPreference::new(prefers_reduced_motion()));
    let motion = *motion;
    let pointer = use_memo((), |_| PointerTracker::default());
    let theme = use_state(resolve_theme);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            log_event(
                LogLevel::Debug,
                "app.mounted",
                json!({ "theme": current.as_str(), "reducedMotion": motion.reduced() }),
            );
            || ()
        });
    }

    {
        let pointer = (*pointer).clone();
        use_effect_with((), move |_| {
            let listeners = window().map(|win| {
                let on_move = {
                    let pointer = pointer.clone();
                    EventListener::new(&win, "pointermove", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            pointer.record(PointerSignal::Moved(Vec2::new(
                                f64::from(event.client_x()),
                                f64::from(event.client_y()),
                            )));
                        }
                    })
                };
                let on_out = {
                    let pointer = pointer.clone();
                    EventListener::new(&win, "pointerout", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            pointer.record(PointerSignal::Out {
                                left_document: event.related_target().is_none(),
                            });
                        }
                    })
                };
                let on_blur = {
                    let pointer = pointer.clone();
                    EventListener::new(&win, "blur", move |_| pointer.record(PointerSignal::Blur))
                };
                [on_move, on_out, on_blur]
            });
            move || drop(listeners)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            if let Err(err) = preference_store().set_theme(next) {
                log_storage_error(crate::preferences::THEME_KEY, &err);
            }
            apply_theme_with_transition(next, motion);
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<MotionPreference> context={motion}>
            <ContextProvider<PointerTracker> context={(*pointer).clone()}>
                <BrowserRouter>
                    <SmoothScroll />
                    <RouteEffects motion={motion} />
                    <a class="skip-link" href="#content">{"Skip to main content"}</a>
                    <Header theme={*theme} on_toggle_theme={on_toggle_theme} />
                    <main id="content">
                        <Breadcrumbs />
                        <Switch<Route> render={switch} />
                    </main>
                    <CompassNav />
                    <Footer />
                    <CookieConsent />
                    <GlassCursor />
                </BrowserRouter>
            </ContextProvider<PointerTracker>>
        </ContextProvider<MotionPreference>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

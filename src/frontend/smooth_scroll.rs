use gloo_events::{EventListener, EventListenerOptions};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, TouchEvent, WheelEvent, Window};
use yew::prelude::*;

use super::effects::{use_motion, FrameLoop};
use super::viewport_size;
use crate::logging::{log_event, LogLevel};
use crate::motion::smooth_scroll::{DeviceClass, ScrollTuning, SmoothScroller, WheelUnit};

/// Wheel and touch listeners plus the frame loop that eases the page toward
/// the virtual scroll target. Dropping it restores native scrolling.
struct SmoothScrollDriver {
    _listeners: Vec<EventListener>,
    _frames: FrameLoop,
}

fn scroll_limit(win: &Window) -> f64 {
    let document_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    (document_height - viewport_size().1).max(0.0)
}

fn first_touch_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| f64::from(touch.client_y()))
}

impl SmoothScrollDriver {
    fn install() -> Option<Self> {
        let win = window()?;
        let user_agent = win.navigator().user_agent().unwrap_or_default();
        let device = DeviceClass::detect(&user_agent, viewport_size().0);
        let position = win.scroll_y().unwrap_or(0.0);
        let scroller = Rc::new(RefCell::new(SmoothScroller::new(
            ScrollTuning::for_device(device),
            position,
            scroll_limit(&win),
        )));
        let active = EventListenerOptions::enable_prevent_default();
        let mut listeners = Vec::new();

        {
            // Routes swap content, so the limit is re-read on every input.
            let scroller = Rc::clone(&scroller);
            let source = win.clone();
            listeners.push(EventListener::new_with_options(&win, "wheel", active, move |event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                if event.ctrl_key() {
                    return;
                }
                event.prevent_default();
                let mut scroller = scroller.borrow_mut();
                scroller.set_limit(scroll_limit(&source));
                let unit = WheelUnit::from_delta_mode(event.delta_mode());
                scroller.on_wheel(unit.to_pixels(event.delta_y(), viewport_size().1));
            }));
        }

        let last_touch = Rc::new(Cell::new(None::<f64>));
        {
            let last_touch = Rc::clone(&last_touch);
            listeners.push(EventListener::new(&win, "touchstart", move |event| {
                if let Some(event) = event.dyn_ref::<TouchEvent>() {
                    last_touch.set(first_touch_y(event));
                }
            }));
        }
        {
            let last_touch = Rc::clone(&last_touch);
            let scroller = Rc::clone(&scroller);
            let source = win.clone();
            listeners.push(EventListener::new_with_options(&win, "touchmove", active, move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let (Some(previous), Some(current)) = (last_touch.get(), first_touch_y(event)) else {
                    return;
                };
                event.prevent_default();
                let mut scroller = scroller.borrow_mut();
                scroller.set_limit(scroll_limit(&source));
                scroller.on_touch(previous - current);
                last_touch.set(Some(current));
            }));
        }
        {
            let last_touch = Rc::clone(&last_touch);
            listeners.push(EventListener::new(&win, "touchend", move |_| last_touch.set(None)));
        }
        {
            // Keyboard, scrollbar and anchor jumps move the page natively.
            let scroller = Rc::clone(&scroller);
            let source = win.clone();
            listeners.push(EventListener::new(&win, "scroll", move |_| {
                let mut scroller = scroller.borrow_mut();
                if scroller.is_settled() {
                    scroller.sync_to(source.scroll_y().unwrap_or(0.0));
                }
            }));
        }
        {
            let scroller = Rc::clone(&scroller);
            let source = win.clone();
            listeners.push(EventListener::new(&win, "resize", move |_| {
                scroller.borrow_mut().set_limit(scroll_limit(&source));
            }));
        }

        let frames = {
            let target = win.clone();
            FrameLoop::start(move |_| {
                let next = scroller.borrow_mut().frame();
                if let Some(offset) = next {
                    target.scroll_to_with_x_and_y(0.0, offset);
                }
                true
            })
        };

        log_event(
            LogLevel::Debug,
            "smooth_scroll.installed",
            json!({ "device": format!("{device:?}"), "start": position }),
        );

        Some(Self {
            _listeners: listeners,
            _frames: frames,
        })
    }
}

/// Installs inertial scrolling for the lifetime of the app unless the
/// visitor asked for reduced motion.
#[function_component(SmoothScroll)]
pub(crate) fn smooth_scroll() -> Html {
    let motion = use_motion();

    use_effect_with(motion, |motion| {
        let driver = if motion.allows_motion() {
            SmoothScrollDriver::install()
        } else {
            None
        };
        move || drop(driver)
    });

    Html::default()
}

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::{element_center, viewport_size, PointerTracker};
use crate::motion::carousel::{CarouselAction, CarouselClock, CarouselState};
use crate::motion::count_up::CountUp;
use crate::motion::proximity::{ProximityField, ProximityFollower};
use crate::motion::scroll::{RegionGeometry, ScrollTracker, ScrollWindow};
use crate::motion::visibility::{GateConfig, VisibilityGate};
use crate::motion::{MotionPreference, Vec2};

const CLOCK_STEP: Duration = Duration::from_millis(500);

type FrameCallback = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// A `requestAnimationFrame` loop. The callback gets the frame timestamp in
/// milliseconds and returns whether to keep going; dropping the loop cancels
/// the pending frame.
pub(crate) struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub(crate) fn start(on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let pending = Rc::new(RefCell::new(None));
        let on_frame: FrameCallback = Rc::new(RefCell::new(on_frame));
        request_next(&pending, on_frame);
        Self { pending }
    }
}

fn request_next(pending: &Rc<RefCell<Option<AnimationFrame>>>, on_frame: FrameCallback) {
    let slot = Rc::clone(pending);
    let handle = request_animation_frame(move |timestamp| {
        let keep_going = (on_frame.borrow_mut())(timestamp);
        if keep_going {
            request_next(&slot, on_frame);
        } else {
            slot.borrow_mut().take();
        }
    });
    *pending.borrow_mut() = Some(handle);
}

impl FrameLoop {
    pub(crate) fn is_running(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn frame_delta(last: &mut Option<f64>, timestamp: f64) -> f64 {
    let dt = last.map_or(0.0, |previous| (timestamp - previous).max(0.0));
    *last = Some(timestamp);
    dt.min(50.0)
}

type StepCallback = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// Frame loop that parks itself when `on_step` reports idle and wakes again
/// on pointer or scroll input. `on_step` gets seconds since the previous frame.
pub(crate) struct WakingLoop {
    _listeners: Vec<EventListener>,
    _frames: Rc<RefCell<Option<FrameLoop>>>,
}

impl WakingLoop {
    pub(crate) fn start(on_step: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let win = window()?;
        let on_step: StepCallback = Rc::new(RefCell::new(on_step));
        let frames = Rc::new(RefCell::new(None::<FrameLoop>));

        let wake: Rc<dyn Fn()> = {
            let frames = Rc::clone(&frames);
            Rc::new(move || {
                if frames.borrow().as_ref().is_some_and(FrameLoop::is_running) {
                    return;
                }
                let on_step = Rc::clone(&on_step);
                let mut last_frame = None;
                let next = FrameLoop::start(move |timestamp| {
                    let dt = frame_delta(&mut last_frame, timestamp) / 1000.0;
                    (on_step.borrow_mut())(dt)
                });
                *frames.borrow_mut() = Some(next);
            })
        };
        wake();

        let listeners = ["pointermove", "pointerout", "scroll", "blur"]
            .into_iter()
            .map(|event| {
                let wake = Rc::clone(&wake);
                EventListener::new(&win, event, move |_| wake())
            })
            .collect();

        Some(Self {
            _listeners: listeners,
            _frames: frames,
        })
    }
}

#[hook]
pub(crate) fn use_motion() -> MotionPreference {
    use_context::<MotionPreference>().unwrap_or_default()
}

#[hook]
pub(crate) fn use_pointer() -> PointerTracker {
    use_context::<PointerTracker>().unwrap_or_default()
}

fn region_geometry(element: &Element) -> RegionGeometry {
    let rect = element.get_bounding_client_rect();
    RegionGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height: viewport_size().1,
    }
}

#[hook]
pub(crate) fn use_scroll_progress(node: NodeRef, scroll_window: ScrollWindow) -> f64 {
    let motion = use_motion();
    let progress = use_state(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with(
            (node, scroll_window, motion),
            move |(node, scroll_window, motion)| {
                let listeners = if motion.allows_motion() {
                    let tracker = Rc::new(RefCell::new(ScrollTracker::new(*scroll_window)));
                    let measure: Rc<dyn Fn()> = {
                        let node = node.clone();
                        Rc::new(move || {
                            let Some(element) = node.cast::<Element>() else {
                                return;
                            };
                            let geometry = region_geometry(&element);
                            let mut tracker = tracker.borrow_mut();
                            if tracker.measure(geometry) {
                                progress.set(tracker.progress());
                            }
                        })
                    };
                    measure();

                    window()
                        .map(|win| {
                            ["scroll", "resize"]
                                .into_iter()
                                .map(|event| {
                                    let measure = Rc::clone(&measure);
                                    EventListener::new(&win, event, move |_| measure())
                                })
                                .collect::<Vec<_>>()
                        })
                        .unwrap_or_default()
                } else {
                    Vec::new()
                };
                move || drop(listeners)
            },
        );
    }

    *progress
}

struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    fn observe(target: &Element, config: GateConfig, on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let mut gate = VisibilityGate::new(config);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if gate.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        on_change(gate.is_visible());
                    }
                }
                if gate.is_latched() {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.root_margin.css());
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether `node` is in view per `config`. Under reduced motion the gate
/// starts open and no observer is attached.
#[hook]
pub(crate) fn use_in_view(node: NodeRef, config: GateConfig) -> bool {
    let motion = use_motion();
    let visible = use_state(|| {
        if motion.reduced() {
            VisibilityGate::opened(config).is_visible()
        } else {
            false
        }
    });

    {
        let visible = visible.clone();
        use_effect_with((node, config, motion), move |(node, config, motion)| {
            let observer = if motion.reduced() {
                None
            } else {
                node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe(&element, *config, move |next| visible.set(next))
                })
            };
            move || drop(observer)
        });
    }

    *visible
}

#[hook]
pub(crate) fn use_proximity(node: NodeRef, field: ProximityField, stiffness: f64) -> Vec2 {
    let motion = use_motion();
    let pointer = use_pointer();
    let offset = use_state(|| Vec2::ZERO);

    {
        let offset = offset.clone();
        use_effect_with(
            (node, field, motion, pointer),
            move |(node, field, motion, pointer)| {
                let frames = motion.allows_motion().then(|| {
                    let node = node.clone();
                    let field = *field;
                    let pointer = pointer.clone();
                    let mut follower = ProximityFollower::new(stiffness);
                    let mut shown = Vec2::ZERO;

                    WakingLoop::start(move |dt| {
                        let Some(element) = node.cast::<Element>() else {
                            return false;
                        };
                        // The element is already displaced by its offset; measure its rest position.
                        let center = element_center(&element) - follower.offset();
                        match pointer.latest() {
                            Some(position) => follower.set_target(field.force(position, center)),
                            None => follower.release(),
                        }

                        let next = follower.step(dt);
                        if next != shown {
                            shown = next;
                            offset.set(next);
                        }
                        !follower.is_settled()
                    })
                });
                move || drop(frames)
            },
        );
    }

    *offset
}

#[hook]
pub(crate) fn use_frame_clock(running: bool) -> f64 {
    let elapsed = use_state(|| 0.0);

    {
        let elapsed = elapsed.clone();
        use_effect_with(running, move |running| {
            let frames = running.then(|| {
                let mut origin = None;
                FrameLoop::start(move |timestamp| {
                    let start = *origin.get_or_insert(timestamp);
                    elapsed.set((timestamp - start) / 1000.0);
                    true
                })
            });
            move || drop(frames)
        });
    }

    *elapsed
}

#[hook]
pub(crate) fn use_count_up(value: AttrValue, started: bool) -> String {
    let motion = use_motion();
    let shown = {
        let value = value.clone();
        use_state(move || {
            let count = CountUp::parse(&value);
            if motion.reduced() {
                count.final_text().to_string()
            } else {
                count.display_at(0.0)
            }
        })
    };

    {
        let shown = shown.clone();
        use_effect_with((value, started, motion), move |(value, started, motion)| {
            let count = CountUp::parse(value);
            let frames = if motion.reduced() || !count.is_numeric() {
                shown.set(count.final_text().to_string());
                None
            } else if !*started {
                None
            } else {
                let mut origin = None;
                Some(FrameLoop::start(move |timestamp| {
                    let start = *origin.get_or_insert(timestamp);
                    let elapsed = (timestamp - start) / 1000.0;
                    shown.set(count.display_at(elapsed));
                    !count.is_finished(elapsed)
                }))
            };
            move || drop(frames)
        });
    }

    (*shown).clone()
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CarouselModel(Option<CarouselState>);

impl CarouselModel {
    pub(crate) fn state(&self) -> Option<&CarouselState> {
        self.0.as_ref()
    }
}

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Some(state) = self.0.as_ref() else {
            return self;
        };
        let mut next = state.clone();
        if next.apply(action) {
            Rc::new(Self(Some(next)))
        } else {
            self
        }
    }
}

/// Carousel state with its auto-advance clock. The clock only runs while
/// the carousel is idle, so every resume waits a full interval.
#[hook]
pub(crate) fn use_carousel(item_count: usize, interval: Duration) -> UseReducerHandle<CarouselModel> {
    let motion = use_motion();
    let model = use_reducer(move || CarouselModel(CarouselState::new(item_count).ok()));
    let running = model
        .state()
        .is_some_and(|state| !state.is_paused() && state.item_count() > 1)
        && motion.allows_motion();

    {
        let dispatcher = model.dispatcher();
        use_effect_with(running, move |running| {
            let timer = running.then(|| {
                let mut clock = CarouselClock::new(interval);
                let step_ms = u32::try_from(CLOCK_STEP.as_millis()).unwrap_or(500);
                Interval::new(step_ms, move || {
                    for _ in 0..clock.advance(CLOCK_STEP) {
                        dispatcher.dispatch(CarouselAction::Tick);
                    }
                })
            });
            move || drop(timer)
        });
    }

    model
}

use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use super::content::{
    Capability, ATMOSPHERE_HEADLINE, ATMOSPHERE_LABEL, BRAND_NAME, CAPABILITIES, DESCRIPTION,
    GALLERY, HERO_BADGE, TAGLINE, TELEMETRY_QUOTE, TELEMETRY_STATS, TESTIMONIALS,
    TESTIMONIALS_TITLE, TRANSMISSION_DESCRIPTION, TRANSMISSION_PLACEHOLDER, TRANSMISSION_SUCCESS,
    TRANSMISSION_TITLE,
};
use super::effects::{
    use_carousel, use_frame_clock, use_in_view, use_motion, use_proximity, use_scroll_progress,
    CarouselModel,
};
use super::viewport_size;
use super::widgets::{AnchorLink, AnimatedSection, StatCounter};
use crate::logging::{log_event, LogLevel};
use crate::motion::carousel::{orbit_slot, CarouselAction, Emphasis, DEFAULT_INTERVAL};
use crate::motion::parallax::{FloatPhase, ParallaxSpec, RangeMap, Variant, VisualProps};
use crate::motion::proximity::ProximityField;
use crate::motion::scroll::ScrollWindow;
use crate::motion::visibility::{GateConfig, RootMargin};

const PANE_REPEL_RADIUS: f64 = 260.0;
const PANE_REPEL_STRENGTH: f64 = 36.0;
const CARD_ATTRACT_RADIUS: f64 = 200.0;
const CARD_ATTRACT_STRENGTH: f64 = 12.0;
const SPRING_STIFFNESS: f64 = 150.0;
const ORBIT_RADIUS: f64 = 320.0;
const ORBIT_RADIUS_NARROW: f64 = 140.0;
const NARROW_VIEWPORT: f64 = 768.0;
const LAUNCH_MS: u32 = 800;
const CONFIRMATION_MS: u32 = 3_200;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <Capabilities />
            <Atmosphere />
            <Telemetry />
            <Testimonials />
            <Transmission />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct GlassPaneProps {
    #[prop_or_default]
    class: Classes,
    delay: f64,
    children: Html,
}

/// Frosted pane that slides in on mount and shies away from the pointer.
#[function_component(GlassPane)]
fn glass_pane(props: &GlassPaneProps) -> Html {
    let node = use_node_ref();
    let motion = use_motion();
    let repel = use_proximity(
        node.clone(),
        ProximityField::repel(PANE_REPEL_RADIUS, PANE_REPEL_STRENGTH),
        SPRING_STIFFNESS,
    );
    let entered = use_in_view(node.clone(), GateConfig::ONCE.root_margin(RootMargin::NONE));
    let entrance = Variant::SlideRight.style(entered, props.delay, motion.allows_motion());
    let drift = VisualProps::IDENTITY.offset(repel.x, repel.y);

    html! {
        <div class={classes!("glass-pane-slot", props.class.clone())} style={entrance}>
            <div ref={node} class="glass glass-pane" style={format!("transform: {};", drift.transform())}>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let node = use_node_ref();
    let motion = use_motion();
    let progress = use_scroll_progress(node.clone(), ScrollWindow::EXIT);
    let exit = ParallaxSpec::default()
        .opacity(RangeMap::span(1.0, 0.0))
        .scale(RangeMap::span(1.0, 0.92))
        .y(RangeMap::span(0.0, 120.0))
        .resolve(progress, motion);

    html! {
        <section id="hero" ref={node} class="hero">
            <div class="hero-stage" style={exit.to_style()}>
                <GlassPane class={classes!("hero-pane-title")} delay={0.8}>
                    <h1 class="display engraved">{BRAND_NAME}</h1>
                </GlassPane>
                <AnimatedSection variant={Variant::ScaleIn} delay={1.0} class={classes!("hero-badge")}>
                    <span class="pill">{HERO_BADGE}</span>
                </AnimatedSection>
                <GlassPane class={classes!("hero-pane-tagline")} delay={1.2}>
                    <p class="hero-tagline">{TAGLINE}</p>
                    <p class="hero-description">{DESCRIPTION}</p>
                </GlassPane>
            </div>
            <AnchorLink href="#capabilities" class={classes!("scroll-indicator")} aria_label={AttrValue::from("Scroll to capabilities")}>
                <span class="scroll-indicator-dot" />
            </AnchorLink>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FloatingCardProps {
    index: usize,
    title: AttrValue,
    subtitle: AttrValue,
    description: AttrValue,
    metric: AttrValue,
    elapsed: f64,
}

#[function_component(FloatingCard)]
fn floating_card(props: &FloatingCardProps) -> Html {
    let node = use_node_ref();
    let motion = use_motion();
    let progress = use_scroll_progress(node.clone(), ScrollWindow::THROUGH);
    let magnet = use_proximity(
        node.clone(),
        ProximityField::attract(CARD_ATTRACT_RADIUS, CARD_ATTRACT_STRENGTH),
        SPRING_STIFFNESS,
    );
    let entered = use_in_view(node.clone(), GateConfig::ONCE);

    let speed = 0.15 + 0.05 * (props.index % 3) as f64;
    let bob = if motion.allows_motion() {
        FloatPhase::GENTLE.offset(props.elapsed + props.index as f64 * 1.3)
    } else {
        0.0
    };
    let drift = ParallaxSpec::float(speed)
        .resolve(progress, motion)
        .offset(magnet.x, magnet.y + bob);
    let entrance = Variant::FadeUp.style(entered, props.index as f64 * 0.1, motion.allows_motion());

    html! {
        <div class="floating-card-slot" style={entrance}>
            <article ref={node} class="glass-card floating-card" style={format!("transform: {};", drift.transform())}>
                <span class="card-subtitle">{props.subtitle.clone()}</span>
                <h3 class="card-title">{props.title.clone()}</h3>
                <p class="card-description">{props.description.clone()}</p>
                <span class="card-metric">{props.metric.clone()}</span>
            </article>
        </div>
    }
}

#[function_component(Capabilities)]
fn capabilities() -> Html {
    let node = use_node_ref();
    let motion = use_motion();
    let on_screen = use_in_view(node.clone(), GateConfig::ALWAYS);
    let elapsed = use_frame_clock(motion.allows_motion() && on_screen);

    html! {
        <section id="capabilities" ref={node} class="section capabilities">
            <AnimatedSection class={classes!("section-header")}>
                <span class="label">{"Intelligence Stack"}</span>
                <h2 class="display">{"Capabilities"}</h2>
            </AnimatedSection>
            <div class="card-field">
                { for CAPABILITIES.iter().enumerate().map(|(index, Capability { title, subtitle, description, metric })| html! {
                    <FloatingCard
                        key={index}
                        index={index}
                        title={*title}
                        subtitle={*subtitle}
                        description={*description}
                        metric={*metric}
                        elapsed={elapsed}
                    />
                }) }
            </div>
        </section>
    }
}

fn on_action<E>(carousel: &UseReducerHandle<CarouselModel>, action: CarouselAction) -> Callback<E> {
    let carousel = carousel.clone();
    Callback::from(move |_| carousel.dispatch(action))
}

fn emphasis_class(emphasis: Emphasis) -> Option<&'static str> {
    match emphasis {
        Emphasis::Normal => None,
        Emphasis::Featured => Some("is-featured"),
        Emphasis::Dimmed => Some("is-dimmed"),
    }
}

/// Ring gallery: rotates on its own, pauses under the pointer or keyboard
/// focus, and features an image on click.
#[function_component(Atmosphere)]
fn atmosphere() -> Html {
    let node = use_node_ref();
    let carousel = use_carousel(GALLERY.len(), DEFAULT_INTERVAL);
    let progress = use_scroll_progress(node.clone(), ScrollWindow::THROUGH);
    let motion = use_motion();
    let tilt = RangeMap::span(8.0, -8.0).resolve(progress, motion, 0.0);

    let Some(state) = carousel.state() else {
        return Html::default();
    };
    let radius = if viewport_size().0 < NARROW_VIEWPORT {
        ORBIT_RADIUS_NARROW
    } else {
        ORBIT_RADIUS
    };
    let featured = state.focused().and_then(|index| GALLERY.get(index));

    html! {
        <section id="atmosphere" ref={node} class="section atmosphere">
            <AnimatedSection class={classes!("section-header")}>
                <span class="label">{ATMOSPHERE_LABEL}</span>
                <h2 class="display">{ATMOSPHERE_HEADLINE}</h2>
            </AnimatedSection>
            <div
                class={classes!("orbit", state.is_paused().then_some("is-paused"))}
                style={format!("transform: perspective(1400px) rotateX({tilt:.2}deg);")}
                onmouseenter={on_action(&carousel, CarouselAction::PointerEnter)}
                onmouseleave={on_action(&carousel, CarouselAction::PointerLeave)}
                onfocusin={on_action(&carousel, CarouselAction::FocusEnter)}
                onfocusout={on_action(&carousel, CarouselAction::FocusLeave)}
            >
                { for GALLERY.iter().enumerate().map(|(index, image)| {
                    let slot = orbit_slot(index, state.item_count(), state.active_index(), radius);
                    let style = format!(
                        "transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3}); z-index: {};",
                        slot.x,
                        slot.y,
                        slot.scale(),
                        slot.z_index()
                    );
                    html! {
                        <button
                            key={index}
                            type="button"
                            class={classes!("orbit-item", emphasis_class(state.emphasis(index)))}
                            style={style}
                            aria-pressed={(state.focused() == Some(index)).to_string()}
                            aria-label={image.caption}
                            onclick={on_action(&carousel, CarouselAction::Select(index))}
                        >
                            <img src={image.src} alt={image.caption} loading="lazy" />
                        </button>
                    }
                }) }
            </div>
            if let Some(image) = featured {
                <div class="orbit-feature glass" role="dialog" aria-label={image.caption}>
                    <p class="orbit-caption">{image.caption}</p>
                    <button type="button" class="orbit-close" onclick={on_action(&carousel, CarouselAction::Close)}>
                        {"Close"}
                    </button>
                </div>
            }
        </section>
    }
}

#[function_component(Telemetry)]
fn telemetry() -> Html {
    let node = use_node_ref();
    let motion = use_motion();
    let progress = use_scroll_progress(node.clone(), ScrollWindow::THROUGH);
    let rotate_y = RangeMap::span(-15.0, 15.0).resolve(progress, motion, 0.0);

    html! {
        <section id="telemetry" ref={node} class="section telemetry">
            <div class="telemetry-core glass" style={format!("transform: perspective(1200px) rotateY({rotate_y:.2}deg);")}>
                <AnimatedSection variant={Variant::FadeIn}>
                    <blockquote class="telemetry-quote">{TELEMETRY_QUOTE}</blockquote>
                </AnimatedSection>
                <div class="stats">
                    { for TELEMETRY_STATS.iter().map(|stat| html! {
                        <StatCounter
                            key={stat.label}
                            value={stat.value}
                            label={stat.label}
                            highlight={stat.highlight}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let carousel = use_carousel(TESTIMONIALS.len(), DEFAULT_INTERVAL);
    let Some(state) = carousel.state() else {
        return Html::default();
    };
    let active = state.active_index();

    html! {
        <section class="section testimonials" aria-roledescription="carousel">
            <AnimatedSection class={classes!("section-header")}>
                <h2 class="display">{TESTIMONIALS_TITLE}</h2>
            </AnimatedSection>
            <div
                class="testimonial-track"
                onmouseenter={on_action(&carousel, CarouselAction::PointerEnter)}
                onmouseleave={on_action(&carousel, CarouselAction::PointerLeave)}
                onfocusin={on_action(&carousel, CarouselAction::FocusEnter)}
                onfocusout={on_action(&carousel, CarouselAction::FocusLeave)}
            >
                { for TESTIMONIALS.iter().enumerate().map(|(index, item)| html! {
                    <figure
                        key={index}
                        class={classes!("testimonial", (index == active).then_some("is-active"))}
                        aria-hidden={(index != active).to_string()}
                    >
                        <blockquote>{item.quote}</blockquote>
                        <figcaption>
                            <span class="testimonial-author">{item.author}</span>
                            <span class="testimonial-role">{item.role}</span>
                        </figcaption>
                    </figure>
                }) }
                <div class="testimonial-dots" role="tablist">
                    { for (0..state.item_count()).map(|index| html! {
                        <button
                            key={index}
                            type="button"
                            role="tab"
                            class={classes!("dot", (index == active).then_some("is-active"))}
                            aria-selected={(index == active).to_string()}
                            aria-label={format!("Show testimonial {}", index + 1)}
                            onclick={on_action(&carousel, CarouselAction::GoTo(index))}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LaunchPhase {
    Idle,
    Launching,
    Received,
}

#[function_component(Transmission)]
fn transmission() -> Html {
    let message = use_state(String::new);
    let phase = use_state(|| LaunchPhase::Idle);

    {
        let phase = phase.clone();
        let message = message.clone();
        use_effect_with(*phase, move |current| {
            let timer = match current {
                LaunchPhase::Idle => None,
                LaunchPhase::Launching => Some(Timeout::new(LAUNCH_MS, move || {
                    message.set(String::new());
                    phase.set(LaunchPhase::Received);
                })),
                LaunchPhase::Received => Some(Timeout::new(CONFIRMATION_MS, move || {
                    phase.set(LaunchPhase::Idle);
                })),
            };
            move || drop(timer)
        });
    }

    let oninput = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            {
                message.set(input.value());
            }
        })
    };

    let onsubmit = {
        let message = message.clone();
        let phase = phase.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if message.trim().is_empty() || *phase != LaunchPhase::Idle {
                return;
            }
            log_event(
                LogLevel::Info,
                "transmission.sent",
                json!({ "chars": message.trim().chars().count() }),
            );
            phase.set(LaunchPhase::Launching);
        })
    };

    let launching = *phase == LaunchPhase::Launching;

    html! {
        <section id="transmission" class="section transmission">
            <AnimatedSection class={classes!("section-header")}>
                <h2 class="display">{TRANSMISSION_TITLE}</h2>
                <p class="section-lede">{TRANSMISSION_DESCRIPTION}</p>
            </AnimatedSection>
            if *phase == LaunchPhase::Received {
                <p class="transmission-received" role="status">{TRANSMISSION_SUCCESS}</p>
            } else {
                <form class={classes!("transmission-form", launching.then_some("is-launching"))} onsubmit={onsubmit}>
                    <label class="sr-only" for="transmission-input">{TRANSMISSION_TITLE}</label>
                    <input
                        id="transmission-input"
                        class="transmission-input"
                        type="text"
                        placeholder={TRANSMISSION_PLACEHOLDER}
                        value={(*message).clone()}
                        disabled={launching}
                        oninput={oninput}
                    />
                    <button class="transmission-send" type="submit" disabled={launching}>
                        {"Send"}
                    </button>
                </form>
            }
        </section>
    }
}


use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

use super::effects::{use_count_up, use_in_view, use_motion};
use super::scroll_to_section;
use crate::motion::parallax::Variant;
use crate::motion::visibility::GateConfig;
use crate::routes::{resolve_href, NavTarget, Route};

#[derive(Properties, PartialEq)]
pub(crate) struct AnimatedSectionProps {
    #[prop_or(Variant::FadeUp)]
    pub variant: Variant,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Plays its entrance variant the first time it scrolls into view.
#[function_component(AnimatedSection)]
pub(crate) fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let motion = use_motion();
    let entered = use_in_view(node.clone(), GateConfig::ONCE);
    let style = props
        .variant
        .style(entered, props.delay, motion.allows_motion());

    html! {
        <div ref={node} class={classes!("animated", props.class.clone())} style={style}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(StatCounter)]
pub(crate) fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let started = use_in_view(node.clone(), GateConfig::ONCE);
    let shown = use_count_up(props.value.clone(), started);

    html! {
        <div ref={node} class={classes!("stat", props.highlight.then_some("stat-highlight"))}>
            <span class="stat-value" aria-label={props.value.clone()}>{shown}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_follow: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Link that understands `#section` anchors: scrolls in place when the
/// target is on the current route, otherwise navigates with the anchor kept.
#[function_component(AnchorLink)]
pub(crate) fn anchor_link(props: &AnchorLinkProps) -> Html {
    let current = use_route::<Route>().unwrap_or(Route::NotFound);
    let motion = use_motion();
    let target = resolve_href(current, &props.href);
    let href = target.href(current);

    let onclick = {
        let on_follow = props.on_follow.clone();
        Callback::from(move |event: MouseEvent| {
            if event.ctrl_key() || event.meta_key() || event.shift_key() {
                return;
            }
            event.prevent_default();
            match &target {
                NavTarget::ScrollTo(id) => {
                    scroll_to_section(id, motion);
                }
                NavTarget::Navigate { .. } => BrowserHistory::new().push(target.href(current)),
            }
            on_follow.emit(());
        })
    };

    html! {
        <a
            class={props.class.clone()}
            href={href}
            aria-label={props.aria_label.clone()}
            onclick={onclick}
        >
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PageHeroProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub accent: Option<AttrValue>,
    pub description: AttrValue,
}

#[function_component(PageHero)]
pub(crate) fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <header class="page-hero">
            <AnimatedSection variant={Variant::FadeIn}>
                <span class="pill">{props.badge.clone()}</span>
            </AnimatedSection>
            <AnimatedSection delay={0.1}>
                <h1 class="page-title">
                    {props.title.clone()}
                    if let Some(accent) = props.accent.clone() {
                        <>{" "}<span class="accent">{accent}</span></>
                    }
                </h1>
            </AnimatedSection>
            <AnimatedSection delay={0.2}>
                <p class="page-lede">{props.description.clone()}</p>
            </AnimatedSection>
        </header>
    }
}

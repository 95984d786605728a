use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::carousel::{Carousel, Direction, Stage};
use crate::config::PageConfig;
use crate::content::{
    Project, FEATURED_HEADING, MESSAGES, NAV_CTA_LABEL, PARALLAX_LABEL, PROJECTS, SITE_NAME,
};
use crate::logging::{log_event, LogLevel};
use crate::sections::{parallax_offset, resolve_active_section, Section};
use crate::ticker::Ticker;

const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
}

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn section_offset(section: Section) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(section.id())?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}

/// Window scroll listener, removed again when dropped.
struct ScrollListener {
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    fn attach(on_scroll: impl Fn() + 'static) -> Option<Self> {
        let callback = Closure::<dyn Fn()>::new(on_scroll);
        window()?
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}

/// One-shot `setTimeout`, cleared when dropped before it fires.
struct PendingTimeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl PendingTimeout {
    fn schedule(delay_ms: i32, on_fire: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(on_fire);
        let handle = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for PendingTimeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.handle);
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CardPhase {
    Resting,
    Entering,
    Exiting,
}

impl CardPhase {
    fn class(self) -> &'static str {
        match self {
            Self::Resting => "is-resting",
            Self::Entering => "is-entering",
            Self::Exiting => "is-exiting",
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    direction: Direction,
    phase: CardPhase,
    #[prop_or_default]
    on_exit_end: Callback<()>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let style = format!(
        "--enter-offset: {}; --exit-offset: {};",
        props.direction.enter_offset(),
        props.direction.exit_offset()
    );

    let onanimationend = {
        let phase = props.phase;
        let on_exit_end = props.on_exit_end.clone();
        Callback::from(move |_: AnimationEvent| {
            if phase == CardPhase::Exiting {
                on_exit_end.emit(());
            }
        })
    };

    html! {
        <article
            class={classes!("project-card", props.phase.class())}
            style={style}
            aria-hidden={(props.phase == CardPhase::Exiting).then(|| AttrValue::from("true"))}
            onanimationend={onanimationend}
        >
            <img class="project-card-media" src={project.image} alt={project.title} />
            <div class="project-card-overlay" aria-hidden="true"></div>
            <div class="project-card-copy">
                <span class="project-card-country">{project.country}</span>
                <h3 class="project-card-title">{project.title}</h3>
                <p class="project-card-subtitle">{project.subtitle}</p>
                <p class="project-card-description">{project.description}</p>
                <a class="project-card-cta" href={project.link}>
                    {"View Project"}
                    <span aria-hidden="true">{" →"}</span>
                </a>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: PageConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config;
    let active_section = use_state_eq(|| Section::Home);
    let scroll_y = use_state_eq(|| 0.0_f64);
    let ticker = use_state(|| Ticker::new(MESSAGES.len()));
    let stage = use_state(|| Carousel::new(PROJECTS.len()).map(Stage::new));
    let reduced_motion = use_state(prefers_reduced_motion);

    use_effect_with((), move |_| {
        log_event(
            config.log_level,
            LogLevel::Info,
            "page_mounted",
            json!({
                "projects": PROJECTS.len(),
                "messages": MESSAGES.len(),
                "tickerMs": config.ticker_period_ms,
            }),
        );
        || ()
    });

    {
        let active_section = active_section.clone();
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = ScrollListener::attach(move || {
                let offset = scroll_offset();
                scroll_y.set(offset);
                if let Some(section) =
                    resolve_active_section(offset, viewport_height(), section_offset)
                {
                    active_section.set(section);
                }
            });

            if listener.is_none() {
                log_event(
                    config.log_level,
                    LogLevel::Warn,
                    "scroll_listener_failed",
                    json!({}),
                );
            }

            move || drop(listener)
        });
    }

    {
        let ticker = ticker.clone();
        use_effect_with(*ticker, move |current| {
            let current = *current;
            log_event(
                config.log_level,
                LogLevel::Debug,
                "ticker_state",
                json!({ "index": current.index(), "blank": current.is_blank() }),
            );

            // Rescheduled on every change rather than running a fixed interval.
            let pending = PendingTimeout::schedule(config.ticker_period_ms, move || {
                ticker.set(current.advanced());
            });

            if pending.is_none() {
                log_event(
                    config.log_level,
                    LogLevel::Warn,
                    "ticker_schedule_failed",
                    json!({ "index": current.index() }),
                );
            }

            move || drop(pending)
        });
    }

    use_effect_with(*active_section, move |section| {
        log_event(
            config.log_level,
            LogLevel::Debug,
            "section_changed",
            json!({ "section": section }),
        );
        || ()
    });

    let carousel = (*stage).map(Stage::carousel);

    use_effect_with(carousel, move |state| {
        log_event(
            config.log_level,
            LogLevel::Info,
            "carousel_state",
            json!({
                "index": state.map(Carousel::active_index),
                "direction": state.map(Carousel::direction),
            }),
        );
        || ()
    });

    let move_to = {
        let stage = stage.clone();
        Callback::from(move |step: fn(Carousel) -> Carousel| {
            if let Some(current) = *stage {
                stage.set(Some(current.moved(step(current.carousel()))));
            }
        })
    };

    let on_previous = {
        let move_to = move_to.clone();
        Callback::from(move |_: MouseEvent| move_to.emit(Carousel::previous))
    };

    let on_next = {
        let move_to = move_to.clone();
        Callback::from(move |_: MouseEvent| move_to.emit(Carousel::next))
    };

    let on_exit_end = {
        let stage = stage.clone();
        Callback::from(move |_: ()| {
            if let Some(current) = *stage {
                stage.set(Some(current.exit_finished()));
            }
        })
    };

    let nav_items = Section::ALL
        .into_iter()
        .map(|section| {
            let onclick = {
                let active_section = active_section.clone();
                Callback::from(move |_: MouseEvent| active_section.set(section))
            };
            let is_active = *active_section == section;

            html! {
                <li key={section.id()}>
                    <button
                        type="button"
                        class={classes!("nav-item", is_active.then_some("is-active"))}
                        aria-current={is_active.then(|| AttrValue::from("true"))}
                        onclick={onclick}
                    >
                        {section.label()}
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let active_index = carousel.map(Carousel::active_index);

    let card = match *stage {
        Some(state) => {
            let carousel = state.carousel();
            let direction = carousel.direction();
            let entering_phase = if state.is_initial() || *reduced_motion {
                CardPhase::Resting
            } else {
                CardPhase::Entering
            };
            // Reduced motion never fires `animationend`, so the old card is dropped at once.
            let exiting = state
                .exiting()
                .filter(|_| !*reduced_motion)
                .and_then(|index| PROJECTS.get(index));

            html! {
                <>
                    if let Some(project) = exiting {
                        <ProjectCard
                            key={format!("exit-{}", project.id)}
                            project={project}
                            direction={direction}
                            phase={CardPhase::Exiting}
                            on_exit_end={on_exit_end.clone()}
                        />
                    }
                    if let Some(project) = carousel.active(PROJECTS) {
                        <ProjectCard
                            key={project.id}
                            project={project}
                            direction={direction}
                            phase={entering_phase}
                        />
                    }
                </>
            }
        }
        None => Html::default(),
    };

    let dots = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let onclick = {
                let stage = stage.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(current) = *stage {
                        stage.set(Some(current.moved(current.carousel().jump_to(index))));
                    }
                })
            };
            let is_active = active_index == Some(index);

            html! {
                <button
                    key={project.id}
                    type="button"
                    class={classes!("carousel-dot", is_active.then_some("is-active"))}
                    aria-label={format!("Go to project {}", index + 1)}
                    aria-current={is_active.then(|| AttrValue::from("true"))}
                    onclick={onclick}
                />
            }
        })
        .collect::<Html>();

    let tagline = match ticker.current(&MESSAGES) {
        Some(text) => html! {
            <p key={ticker.index().to_string()} class="tagline">{text}</p>
        },
        None => html! {
            <p key="blank" class="tagline is-blank" aria-hidden="true"></p>
        },
    };

    let parallax = if *reduced_motion {
        0.0
    } else {
        parallax_offset(*scroll_y, config.parallax_factor)
    };
    let parallax_style = format!("transform: translateY({parallax:.2}px);");

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <header class="site-header">
                    <nav class="site-nav" aria-label="Primary">
                        <a class="site-name" href="/">{SITE_NAME}</a>
                        <ul class="nav-list">
                            {nav_items}
                        </ul>
                        <button class="nav-cta" type="button">{NAV_CTA_LABEL}</button>
                    </nav>
                </header>

                <main id="content">
                    <section id={Section::Home.id()} class="hero">
                        {tagline}
                    </section>

                    <section id={Section::Work.id()} class="featured-work" aria-labelledby="work-heading">
                        <h2 id="work-heading">{FEATURED_HEADING}</h2>
                        <div class="carousel">
                            {card}
                            <button
                                class="carousel-arrow carousel-arrow-previous"
                                type="button"
                                aria-label="Previous project"
                                onclick={on_previous}
                            >
                                <span aria-hidden="true">{"‹"}</span>
                            </button>
                            <button
                                class="carousel-arrow carousel-arrow-next"
                                type="button"
                                aria-label="Next project"
                                onclick={on_next}
                            >
                                <span aria-hidden="true">{"›"}</span>
                            </button>
                        </div>
                        <div class="carousel-dots">
                            {dots}
                        </div>
                    </section>
                </main>

                <footer class="site-footer"></footer>
            </div>
            <div class="parallax-label" style={parallax_style} aria-hidden="true">
                <h2>{PARALLAX_LABEL}</h2>
            </div>
        </>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = PageConfig::from_mount(&root);

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(win) = window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        let _ = JsFuture::from(promise).await;
    }

    fn flag_setter(flag: &Rc<Cell<bool>>) -> impl FnMut() + 'static {
        let flag = flag.clone();
        move || flag.set(true)
    }

    fn dispatch_scroll() {
        let win = window().expect("window available");
        let event = web_sys::Event::new("scroll").expect("scroll event");
        win.dispatch_event(&event).expect("scroll dispatched");
    }

    fn mount_app() -> Element {
        let document = window()
            .and_then(|w| w.document())
            .expect("document available");
        let root = document.create_element("div").expect("root element");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("root attached");

        yew::Renderer::<App>::with_root_and_props(
            root.clone(),
            AppProps {
                config: PageConfig::default(),
            },
        )
        .render();

        root
    }

    #[wasm_bindgen_test]
    async fn kept_timeout_fires() {
        let fired = Rc::new(Cell::new(false));
        let _pending = PendingTimeout::schedule(10, flag_setter(&fired)).expect("timeout scheduled");

        sleep(60).await;
        assert!(fired.get());
    }

    #[wasm_bindgen_test]
    async fn dropped_timeout_never_fires() {
        let fired = Rc::new(Cell::new(false));
        let pending = PendingTimeout::schedule(10, flag_setter(&fired)).expect("timeout scheduled");
        drop(pending);

        sleep(60).await;
        assert!(!fired.get());
    }

    #[wasm_bindgen_test]
    async fn rescheduling_cancels_the_previous_timeout() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        let mut pending = PendingTimeout::schedule(10, flag_setter(&first));
        assert!(pending.is_some());
        pending = PendingTimeout::schedule(20, flag_setter(&second));

        sleep(80).await;
        assert!(pending.is_some());
        assert!(!first.get());
        assert!(second.get());
    }

    #[wasm_bindgen_test]
    fn dropped_scroll_listener_stops_receiving_events() {
        let calls = Rc::new(Cell::new(0_u32));
        let listener = ScrollListener::attach({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        })
        .expect("listener attached");

        dispatch_scroll();
        assert_eq!(calls.get(), 1);

        drop(listener);
        dispatch_scroll();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn first_card_rests_and_next_card_slides_old_one_out() {
        let root = mount_app();
        sleep(50).await;

        assert!(root
            .query_selector(".project-card.is-resting")
            .expect("valid selector")
            .is_some());
        assert!(root.query_selector(".is-exiting").expect("valid selector").is_none());

        root.query_selector(".carousel-arrow-next")
            .expect("valid selector")
            .and_then(|button| button.dyn_into::<HtmlElement>().ok())
            .expect("next button rendered")
            .click();
        sleep(50).await;

        let exiting = root
            .query_selector(".project-card.is-exiting")
            .expect("valid selector")
            .expect("previous card kept while sliding out");
        let style = exiting.get_attribute("style").unwrap_or_default();
        assert!(style.contains("--exit-offset: -100%"), "{style}");
        assert!(root
            .query_selector(".project-card.is-entering")
            .expect("valid selector")
            .is_some());
    }

    #[wasm_bindgen_test]
    async fn tagline_is_not_announced() {
        let root = mount_app();
        sleep(50).await;

        assert!(root.query_selector(".tagline").expect("valid selector").is_some());
        assert!(root.query_selector("[aria-live]").expect("valid selector").is_none());
    }
}

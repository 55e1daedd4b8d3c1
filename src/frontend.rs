use js_sys::Math;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

use crate::chart::{ChartLifecycle, EchartsHost, CHART_CONTAINER_ID};
use crate::content::{self, PROFILE};
use crate::scroll;
use crate::theme::Theme;

const PARTICLE_COUNT: usize = 50;

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

fn scroll_behavior() -> ScrollBehavior {
    if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Scrolls the viewport to a section by id. An unknown id is a no-op.
fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(scroll_behavior());
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(scroll_behavior());
    win.scroll_to_with_scroll_to_options(&options);
}

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Starts watching every reveal-tracked block. Blocks already inside the
/// threshold reveal from the observer's initial callback, so content above
/// the fold never waits for a scroll event. Revealed blocks are unobserved,
/// which keeps the transition one-way.
fn observe_reveals() -> Option<(IntersectionObserver, RevealCallback)> {
    let document = window()?.document()?;

    let callback: RevealCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let classes = target.class_list();
                let already = classes.contains(scroll::REVEAL_DONE_CLASS);
                if scroll::should_reveal(already, entry.is_intersecting()) {
                    let _ = classes.add_1(scroll::REVEAL_DONE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(scroll::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let selector = format!(".{}", scroll::REVEAL_PENDING_CLASS);
    let blocks = document.query_selector_all(&selector).ok()?;
    for index in 0..blocks.length() {
        if let Some(node) = blocks.item(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                observer.observe(&element);
            }
        }
    }

    Some((observer, callback))
}

struct Particle {
    size: f64,
    left: f64,
    top: f64,
    opacity: f64,
    duration: f64,
    delay: f64,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.1}%; top: {top:.1}%; \
             opacity: {opacity:.2}; animation-duration: {duration:.1}s; \
             animation-delay: {delay:.1}s;",
            size = self.size,
            left = self.left,
            top = self.top,
            opacity = self.opacity,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

fn scatter_particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size: Math::random() * 10.0 + 5.0,
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            opacity: Math::random() * 0.5 + 0.1,
            duration: Math::random() * 10.0 + 20.0,
            delay: Math::random() * 10.0,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

fn section_heading(id: &'static str, title: &'static str, intro: Option<&'static str>) -> Html {
    html! {
        <div class="section-heading animate-on-scroll">
            <h2 id={id}>{title}</h2>
            <div class="heading-rule" aria-hidden="true"></div>
            if let Some(intro) = intro {
                <p class="section-intro">{intro}</p>
            }
        </div>
    }
}

fn hero_section() -> Html {
    html! {
        <section id="home" class="hero" aria-labelledby="hero-heading">
            <div class="hero-grid">
                <div class="hero-copy animate-on-scroll">
                    <h1 id="hero-heading" class="hero-heading">
                        <span class="hero-greeting">{"Hello, I'm"}</span>
                        <span class="hero-name">{PROFILE.name}</span>
                    </h1>
                    <div class="hero-titles" aria-label={PROFILE.role}>
                        { for content::ROTATING_TITLES.iter().enumerate().map(|(index, title)| {
                            let delay = format!("animation-delay: {}s;", index * 2);
                            html! { <span class="hero-title" style={delay} aria-hidden="true">{*title}</span> }
                        })}
                    </div>
                    <p class="hero-tagline">{PROFILE.tagline}</p>
                    <div class="hero-actions">
                        <ExternalLink class="button button-primary" href={PROFILE.github} label="GitHub" />
                        <ExternalLink class="button button-accent" href={PROFILE.linkedin} label="LinkedIn" />
                    </div>
                </div>
                <div class="hero-portrait animate-on-scroll">
                    <div class="portrait-frame">
                        <img src="/portrait.jpg" alt={PROFILE.name} />
                    </div>
                    { for content::HERO_BADGES.iter().enumerate().map(|(index, badge)| {
                        let style = format!(
                            "top: {}%; {}: -5%; animation-duration: {}s; animation-delay: {:.1}s;",
                            20 + index * 15,
                            if index % 2 == 0 { "right" } else { "left" },
                            3 + index,
                            index as f64 * 0.5,
                        );
                        html! { <span class="hero-badge" style={style} aria-hidden="true">{*badge}</span> }
                    })}
                </div>
            </div>
        </section>
    }
}

fn about_section() -> Html {
    html! {
        <section id="about" class="section-block" aria-labelledby="about-heading">
            { section_heading("about-heading", "About Me", None) }
            <div class="section-grid">
                <div class="animate-on-scroll">
                    <h3>{"Who I Am"}</h3>
                    { for content::ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                        <p class="muted">{*paragraph}</p>
                    })}
                    <ul class="tag-cloud">
                        { for content::SKILL_TAGS.iter().map(|tag| html! {
                            <li class="tag">{*tag}</li>
                        })}
                    </ul>
                </div>
                <div class="animate-on-scroll">
                    <h3>{"Education"}</h3>
                    <ol class="timeline">
                        { for content::EDUCATION.iter().map(|entry| html! {
                            <li class="timeline-entry">
                                <h4>{entry.degree}</h4>
                                <p class="muted">{entry.institution}</p>
                            </li>
                        })}
                    </ol>
                </div>
            </div>
        </section>
    }
}

fn skills_section() -> Html {
    html! {
        <section id="skills" class="section-block" aria-labelledby="skills-heading">
            { section_heading(
                "skills-heading",
                "My Skills",
                Some("I've developed expertise across various technologies and tools, \
                      enabling me to build comprehensive web solutions."),
            ) }
            <div class="section-grid">
                <div class="animate-on-scroll">
                    <div id={CHART_CONTAINER_ID} class="skill-chart" aria-label="Skill-level radar chart"></div>
                </div>
                <div class="animate-on-scroll">
                    <h3>{"Technical Proficiencies"}</h3>
                    { for content::PROFICIENCIES.iter().map(|proficiency| {
                        let width = format!("width: {}%;", proficiency.value);
                        html! {
                            <div class="proficiency">
                                <div class="proficiency-label">
                                    <span>{proficiency.name}</span>
                                    <span class="proficiency-value">{format!("{}%", proficiency.value)}</span>
                                </div>
                                <div class="proficiency-track">
                                    <div class="proficiency-fill" style={width}></div>
                                </div>
                            </div>
                        }
                    })}
                    <h3>{"Tools & Environments"}</h3>
                    <ul class="tool-grid">
                        { for content::TOOLS.iter().map(|tool| html! {
                            <li class="tool-card">{*tool}</li>
                        })}
                    </ul>
                </div>
            </div>
        </section>
    }
}

fn projects_section() -> Html {
    html! {
        <section id="projects" class="section-block" aria-labelledby="projects-heading">
            { section_heading(
                "projects-heading",
                "Featured Projects",
                Some("A showcase of my recent work, demonstrating my skills and \
                      expertise in web development."),
            ) }
            <div class="project-grid">
                { for content::PROJECTS.iter().map(|project| html! {
                    <article class="project-card animate-on-scroll">
                        <div class="project-media">
                            <img src={project.image} alt={project.image_alt} loading="lazy" />
                        </div>
                        <div class="project-copy">
                            <h3>{project.title}</h3>
                            <p class="muted">{project.description}</p>
                            <ul class="tag-cloud">
                                { for project.tech.iter().map(|tech| html! {
                                    <li class="tag tag-small">{*tech}</li>
                                })}
                            </ul>
                        </div>
                    </article>
                })}
            </div>
            <div class="section-cta animate-on-scroll">
                <ExternalLink
                    class="button button-primary"
                    href={PROFILE.github_repositories}
                    label="View All Projects"
                />
            </div>
        </section>
    }
}

fn experience_section() -> Html {
    html! {
        <section id="experience" class="section-block" aria-labelledby="experience-heading">
            { section_heading(
                "experience-heading",
                "Work Experience",
                Some("My professional journey in the world of software development."),
            ) }
            <ol class="timeline timeline-wide">
                { for content::JOBS.iter().map(|job| html! {
                    <li class="timeline-entry animate-on-scroll">
                        <div class="job-card">
                            <div class="job-header">
                                <h3>{job.position}</h3>
                                <span class="job-period">{job.period}</span>
                            </div>
                            <h4 class="job-company">{job.company}</h4>
                            <p class="muted">{job.description}</p>
                            <ul class="tag-cloud">
                                { for job.technologies.iter().map(|tech| html! {
                                    <li class="tag tag-small">{*tech}</li>
                                })}
                            </ul>
                        </div>
                    </li>
                })}
            </ol>
        </section>
    }
}

fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-identity">
                <h2>{PROFILE.name}</h2>
                <p class="muted">{PROFILE.role}</p>
            </div>
            <ul class="footer-links">
                <li>
                    <a class="link" href={format!("mailto:{}", PROFILE.email)}>{"Email"}</a>
                </li>
                <li><ExternalLink href={PROFILE.github} label="GitHub" /></li>
                <li><ExternalLink href={PROFILE.linkedin} label="LinkedIn" /></li>
            </ul>
            <p class="footer-note muted">
                {format!("© {year} {}. All rights reserved.", PROFILE.name)}
            </p>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(Theme::default);
    // `use_state_eq`: scroll events arrive continuously, but the flag only
    // re-renders when it crosses the threshold.
    let scrolled = use_state_eq(|| false);
    let chart = use_mut_ref(|| ChartLifecycle::new(EchartsHost));
    let particles = use_memo((), |_| scatter_particles(PARTICLE_COUNT));

    // Reveal observer lives for the whole page lifetime.
    use_effect_with((), |_| {
        let observed = observe_reveals();
        move || {
            if let Some((observer, _callback)) = observed {
                observer.disconnect();
            }
        }
    });

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::new(move || {
                scrolled.set(scroll::past_back_to_top_threshold(scroll_offset()));
            });
            if let Some(win) = window() {
                let _ =
                    win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // The chart is restyled per theme, so the instance is swapped whenever
    // the theme changes; the lifecycle releases the old one first.
    {
        let chart = chart.clone();
        let current = *theme;
        use_effect_with(current, move |_| {
            chart.borrow_mut().activate(current);
            move || chart.borrow_mut().release()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set((*theme).toggled()))
    };

    let on_back_to_top = Callback::from(|_| scroll_to_top());

    html! {
        <div class={classes!("page", theme.page_class())}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="particle-field" aria-hidden="true">
                { for particles.iter().map(|particle| html! {
                    <span class="particle" style={particle.style()}></span>
                })}
            </div>
            <header class="site-header">
                <span class="wordmark">{PROFILE.name}</span>
                <nav class="site-nav" aria-label="Sections">
                    { for content::SECTION_IDS.iter().map(|&id| {
                        let onclick = Callback::from(move |_| scroll_to_section(id));
                        html! {
                            <button class="nav-link" type="button" onclick={onclick}>{id}</button>
                        }
                    })}
                </nav>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={theme.toggle_label()}
                    aria-pressed={theme.pressed().to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{theme.icon()}</span>
                </button>
            </header>
            <main id="content">
                { hero_section() }
                { about_section() }
                { skills_section() }
                { projects_section() }
                { experience_section() }
            </main>
            { footer() }
            <button
                class={classes!("back-to-top", (*scrolled).then_some("is-visible"))}
                type="button"
                aria-label="Back to top"
                aria-hidden={(!*scrolled).to_string()}
                onclick={on_back_to_top}
            >
                <span aria-hidden="true">{"↑"}</span>
            </button>
        </div>
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

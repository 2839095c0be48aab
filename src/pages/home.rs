use chrono::Datelike;
use log::debug;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::animation::{AnimationSession, WebStage};
use crate::components::navbar::Navbar;
use crate::dom::{BrowserWindow, EventSubscription};
use crate::menu::{self, MenuEvent, MenuState};
use crate::theme::{ThemeHandle, ThemeStore};
use crate::viewport::{BrowserLayout, ViewportWatcher};

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature { icon: "🗣️", title: "Speaking Practice", desc: "Live 1:1 speaking drills." },
    Feature { icon: "📝", title: "Mock Tests", desc: "Realistic full-length tests." },
    Feature { icon: "🤖", title: "AI Band Predictor", desc: "Instant predicted band." },
    Feature { icon: "📚", title: "Personalized Plans", desc: "Adaptive study schedules." },
];

const TESTIMONIALS: [(&str, &str); 2] = [
    ("“Scored 7.5 after 2 months — the mock tests were on point.”", "— Aisha K."),
    ("“Speaking practice & feedback were game changers.”", "— Ravi S."),
];

/// Every effect the landing page registers, owned together. Set up in a
/// fixed order and torn down in the reverse one.
struct PageScope {
    animation: Option<AnimationSession<WebStage>>,
    viewport: Option<ViewportWatcher>,
    menu_resize: Option<EventSubscription>,
}

impl PageScope {
    fn mount(
        store: &ThemeStore,
        root: &NodeRef,
        nav: &NodeRef,
        menu_dispatch: UseReducerDispatcher<MenuState>,
    ) -> Self {
        store.set(store.get());

        let animation = root
            .cast::<Element>()
            .map(|root| AnimationSession::start(WebStage::new(root)));
        let viewport = nav
            .cast::<HtmlElement>()
            .and_then(BrowserLayout::new)
            .map(ViewportWatcher::attach);
        let menu_resize = menu::follow_resizes(&BrowserWindow, move |event| {
            menu_dispatch.dispatch(event)
        });

        debug!(
            "Landing page effects mounted (scroll-linked: {})",
            animation.as_ref().map_or(false, |session| session.is_listening())
        );
        Self {
            animation,
            viewport,
            menu_resize,
        }
    }
}

impl Drop for PageScope {
    fn drop(&mut self) {
        self.menu_resize.take();
        self.viewport.take();
        self.animation.take();
        debug!("Landing page effects torn down");
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let root_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let store = use_context::<ThemeHandle>().unwrap_or_else(ThemeHandle::browser);
    let theme = {
        let store = store.clone();
        use_state(move || store.get())
    };
    let menu = use_reducer(MenuState::default);

    {
        let store = store.clone();
        let root_ref = root_ref.clone();
        let nav_ref = nav_ref.clone();
        let menu = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                let scope = PageScope::mount(&store, &root_ref, &nav_ref, menu);
                move || drop(scope)
            },
            (),
        );
    }

    let toggle_theme = {
        let store = store.clone();
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(store.toggle()))
    };

    let on_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |event: MenuEvent| menu.dispatch(event))
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="site-root" ref={root_ref}>
            <style>
                {r#"
                :root {
                    --bg: #f7f8fc;
                    --surface: #ffffff;
                    --muted-bg: #eef1f8;
                    --text: #0d1426;
                    --muted: #5b6478;
                    --border: rgba(13, 20, 38, 0.08);
                    --accent: #2f6bff;
                    --nav-bg: rgba(255, 255, 255, 0.85);
                }
                [data-theme="dark"] {
                    --bg: #060b19;
                    --surface: #0e1529;
                    --muted-bg: #0a1122;
                    --text: #eef2ff;
                    --muted: #98a2bd;
                    --border: rgba(255, 255, 255, 0.08);
                    --accent: #5b8cff;
                    --nav-bg: rgba(6, 11, 25, 0.85);
                }
                .site-root {
                    min-height: 100vh;
                    background: var(--bg);
                    color: var(--text);
                    overflow-x: hidden;
                }
                .page-body {
                    padding-top: var(--nav-height-dynamic, 5rem);
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .hero-section {
                    position: relative;
                    overflow: hidden;
                    color: #eef2ff;
                }
                .hero-bg {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    background-size: cover;
                    background-position: center;
                }
                .hero-grid {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                    padding: 5rem 1.5rem;
                }
                @media (min-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr 1fr;
                        padding: 7rem 1.5rem;
                    }
                }
                .eyebrow {
                    font-size: 0.85rem;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: #98a2bd;
                }
                .hero-title {
                    font-size: clamp(2.2rem, 5vw, 3.6rem);
                    line-height: 1.1;
                    margin: 1rem 0 0;
                }
                .hero-title .accent {
                    color: #7ea6ff;
                }
                .hero-sub {
                    margin-top: 1rem;
                    max-width: 36rem;
                    color: #c8d0e6;
                }
                .hero-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .btn-primary, .btn-outline {
                    padding: 0.8rem 1.4rem;
                    border-radius: 999px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .btn-primary {
                    background: var(--accent);
                    color: #fff;
                    border: none;
                }
                .cta-glow {
                    box-shadow: 0 0 24px rgba(91, 140, 255, 0.45);
                }
                .btn-outline {
                    background: transparent;
                    color: inherit;
                    border: 1px solid rgba(255, 255, 255, 0.35);
                }
                .stats {
                    margin-top: 1.5rem;
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.9rem;
                }
                .stat-val {
                    font-size: 1.4rem;
                    font-weight: 700;
                }
                .stat-label, .muted {
                    color: var(--muted);
                }
                .hero-right {
                    display: flex;
                    justify-content: center;
                }
                .mock-card {
                    width: 100%;
                    max-width: 24rem;
                    padding: 1.25rem;
                    border-radius: 18px;
                    background: rgba(14, 21, 41, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .mock-top {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .live-badge {
                    font-size: 0.7rem;
                    font-weight: 700;
                    padding: 0.2rem 0.5rem;
                    border-radius: 6px;
                    background: #e5484d;
                    color: #fff;
                    height: fit-content;
                }
                .progress {
                    margin-top: 1rem;
                    height: 8px;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }
                .progress-fill {
                    height: 100%;
                    background: var(--accent);
                }
                .progress-row, .card-actions {
                    margin-top: 0.75rem;
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.75rem;
                }
                .card-actions {
                    justify-content: flex-start;
                    gap: 0.75rem;
                }
                .card-btn {
                    padding: 0.45rem 0.9rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: inherit;
                }
                .card-btn.primary {
                    background: var(--accent);
                    border-color: transparent;
                }
                .features-section, .testimonials-section {
                    padding: 4rem 0;
                }
                .section-light {
                    background: var(--surface);
                }
                .section-muted {
                    background: var(--muted-bg);
                }
                .section-title {
                    font-size: 2rem;
                    margin: 0;
                }
                .section-sub {
                    color: var(--muted);
                }
                .feature-grid, .testimonial-grid {
                    margin-top: 2rem;
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 640px) {
                    .feature-grid, .testimonial-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 1024px) {
                    .feature-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .feature-card, .testimonial {
                    margin: 0;
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: var(--bg);
                    border: 1px solid var(--border);
                }
                .feature-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .feature-ico {
                    font-size: 1.5rem;
                }
                .feature-title {
                    margin: 0;
                    font-size: 1.05rem;
                }
                .feature-desc {
                    color: var(--muted);
                }
                .linkish {
                    background: none;
                    border: none;
                    padding: 0;
                    color: var(--accent);
                    cursor: pointer;
                    font-weight: 600;
                }
                .footer {
                    padding: 2rem 0;
                    background: #060b19;
                    color: #eef2ff;
                }
                .footer-inner {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    font-weight: 700;
                    font-size: 1.1rem;
                }
                "#}
            </style>

            <Navbar
                theme={*theme}
                on_toggle_theme={toggle_theme}
                menu={*menu}
                on_menu={on_menu}
                nav_ref={nav_ref}
            />

            <div class="page-body" id="home">
                <header class="hero-section">
                    <div
                        class="hero-bg"
                        style="background-image: linear-gradient(180deg, rgba(6,11,25,0.6), rgba(6,11,25,0.6)), url('https://images.unsplash.com/photo-1503676260728-1c00da094a0b?q=80&w=1600&auto=format&fit=crop');"
                    ></div>
                    <div class="container hero-grid">
                        <div class="hero-left">
                            <div class="eyebrow">{"Live classes • Mock tests"}</div>
                            <h1 class="hero-title">
                                {"Master IELTS — "}<span class="accent">{"confidently"}</span>
                            </h1>
                            <p class="hero-sub">
                                {"Practical lessons, weekly mock tests, and focused speaking practice — structured to improve your band quickly."}
                            </p>
                            <div class="hero-actions">
                                <button class="btn-primary hero-cta cta-glow">{"Start Free Trial"}</button>
                                <button class="btn-outline hero-cta">{"View Courses"}</button>
                            </div>
                            <div class="stats">
                                <div>
                                    <div class="stat-val">{"+1.6"}</div>
                                    <div class="stat-label">{"Avg Band"}</div>
                                </div>
                                <div>
                                    <div class="stat-val">{"92%"}</div>
                                    <div class="stat-label">{"Success"}</div>
                                </div>
                            </div>
                        </div>

                        <div class="hero-right">
                            <div class="mock-card">
                                <div class="mock-top">
                                    <div>
                                        <h3 class="mock-title">{"Mock Test: Academic"}</h3>
                                        <p class="mock-sub">{"Full-length simulation • 2 hrs"}</p>
                                    </div>
                                    <div class="live-badge">{"LIVE"}</div>
                                </div>
                                <div class="progress" aria-hidden="true">
                                    <div class="progress-fill" style="width: 78%;"></div>
                                </div>
                                <div class="progress-row muted">
                                    <span>{"Practice"}</span>
                                    <span>{"78% completed"}</span>
                                </div>
                                <div class="card-actions">
                                    <button class="card-btn primary">{"Continue"}</button>
                                    <button class="card-btn plain">{"Details"}</button>
                                </div>
                            </div>
                        </div>
                    </div>
                </header>

                <main>
                    <section class="features-section section-light" id="features">
                        <div class="container">
                            <h2 class="section-title">{"What we offer"}</h2>
                            <p class="section-sub">{"Focused training across Reading, Writing, Listening and Speaking."}</p>
                            <div class="feature-grid">
                                { for FEATURES.iter().map(|feature| html! {
                                    <article class="feature-card">
                                        <div class="feature-head">
                                            <div class="feature-ico">{feature.icon}</div>
                                            <h3 class="feature-title">{feature.title}</h3>
                                        </div>
                                        <p class="feature-desc">{feature.desc}</p>
                                        <button class="linkish">{"Learn more →"}</button>
                                    </article>
                                }) }
                            </div>
                        </div>
                    </section>

                    <section class="testimonials-section section-muted" id="testimonials">
                        <div class="container">
                            <h2 class="section-title">{"Students love us"}</h2>
                            <div class="testimonial-grid">
                                { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                                    <blockquote class="testimonial">
                                        <p>{*quote}</p>
                                        <footer class="muted">{*author}</footer>
                                    </blockquote>
                                }) }
                            </div>
                        </div>
                    </section>
                </main>
            </div>

            <footer class="footer" id="contact">
                <div class="container footer-inner">
                    <div>
                        <div class="brand">{"IeltsEdge"}</div>
                        <div class="muted">{"hello@ieltledge.com • +91 98765 43210"}</div>
                    </div>
                    <div class="muted">{format!("© {} IeltsEdge", year)}</div>
                </div>
            </footer>
        </div>
    }
}

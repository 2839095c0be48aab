use yew::prelude::*;
use yew_router::prelude::*;

use crate::menu::{MenuEvent, MenuState};
use crate::theme::ThemePreference;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: ThemePreference,
    pub on_toggle_theme: Callback<()>,
    pub menu: MenuState,
    pub on_menu: Callback<MenuEvent>,
    pub nav_ref: NodeRef,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let dark = props.theme.is_dark();
    let open = props.menu.is_open();

    let toggle_menu = {
        let on_menu = props.on_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_menu.emit(MenuEvent::Toggle);
        })
    };

    // Links keep their default navigation; they only shut the drawer.
    let close_menu = {
        let on_menu = props.on_menu.clone();
        Callback::from(move |_: MouseEvent| {
            on_menu.emit(MenuEvent::LinkActivated);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <header class="navbar" role="banner" ref={props.nav_ref.clone()}>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: var(--nav-bg);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid var(--border);
                }
                .navbar-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.9rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .navbar-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    text-decoration: none;
                    color: var(--text);
                    font-weight: 700;
                }
                .logo-box {
                    width: 2.2rem;
                    height: 2.2rem;
                    border-radius: 10px;
                    display: grid;
                    place-items: center;
                    background: var(--accent);
                    color: #fff;
                    font-size: 0.9rem;
                }
                .navbar-links {
                    display: flex;
                    gap: 1.75rem;
                }
                .navbar-links a {
                    color: var(--muted);
                    text-decoration: none;
                    font-weight: 500;
                }
                .navbar-links a:hover {
                    color: var(--text);
                }
                .navbar-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .dark-toggle {
                    background: transparent;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    width: 2.4rem;
                    height: 2.4rem;
                    cursor: pointer;
                }
                .login-btn {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: var(--accent);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.4rem;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--text);
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                        order: 3;
                    }
                    .navbar-links {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.25rem 1.5rem;
                        background: var(--nav-bg);
                        border-bottom: 1px solid var(--border);
                    }
                }
                @media (min-width: 901px) {
                    .navbar-links {
                        opacity: 1 !important;
                        pointer-events: auto !important;
                    }
                }
                "#}
            </style>
            <div class="navbar-container">
                <a href="#home" class="navbar-logo" aria-label="IeltsEdge home" onclick={close_menu.clone()}>
                    <div class="logo-box" aria-hidden="true">{"IE"}</div>
                    <span class="logo-text">{"IeltsEdge"}</span>
                </a>

                <button
                    type="button"
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav
                    class={classes!("navbar-links", open.then(|| "mobile-menu-open"))}
                    style={props.menu.drawer_style()}
                    role="navigation"
                    aria-label="Main"
                >
                    <a href="#features" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="#testimonials" onclick={close_menu.clone()}>{"Testimonials"}</a>
                    <a href="#contact" onclick={close_menu.clone()}>{"Contact"}</a>
                </nav>

                <div class="navbar-actions">
                    <button
                        type="button"
                        class="dark-toggle"
                        onclick={toggle_theme}
                        aria-pressed={dark.to_string()}
                        aria-label={if dark { "Switch to light mode" } else { "Switch to dark mode" }}
                        title={if dark { "Light mode" } else { "Dark mode" }}
                    >
                        {if dark { "🌞" } else { "🌙" }}
                    </button>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Login} classes="login-btn">
                            {"🔑 Login"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </header>
    }
}

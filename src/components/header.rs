use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

pub fn is_scrolled_past(offset: f64) -> bool {
    offset > config::HEADER_SCROLL_THRESHOLD
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(is_scrolled_past(offset));
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
            {r#".site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.25rem 0;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.92);
                    backdrop-filter: blur(12px);
                    padding: 0.75rem 0;
                    box-shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
                }
                .header-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    font-size: 1.3rem;
                    font-weight: 800;
                    color: #1e293b;
                    text-decoration: none;
                }
                .header-nav {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .header-nav a {
                    color: #334155;
                    text-decoration: none;
                    font-weight: 500;
                }
                .header-nav .header-signup {
                    padding: 0.55rem 1.2rem;
                    border-radius: 999px;
                    color: #fff;
                    background: linear-gradient(135deg, #667eea, #764ba2);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1e293b;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .header-nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: #fff;
                    }
                    .header-nav.mobile-menu-open {
                        display: flex;
                    }
                }"#}
            </style>
            <div class="container header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("header-nav", (*menu_open).then(|| "mobile-menu-open"))}>
                    <a href="/#services" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="/#documents" onclick={close_menu.clone()}>{"Documents"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Login}>{"Connexion"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Signup} classes="header-signup">
                            {"Inscription"}
                        </Link<Route>>
                    </div>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_only_past_threshold() {
        assert!(!is_scrolled_past(0.0));
        assert!(!is_scrolled_past(config::HEADER_SCROLL_THRESHOLD));
        assert!(is_scrolled_past(config::HEADER_SCROLL_THRESHOLD + 1.0));
    }
}

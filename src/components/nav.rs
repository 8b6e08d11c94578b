use yew::prelude::*;

use crate::scroller::ScrollerHandle;
use crate::sections::{CONTACT, HERO, SERVICES, TESTIMONIALS};
use crate::theme::{use_theme, Theme};

pub const NAV_ITEMS: &[(&str, usize)] = &[
    ("Home", HERO),
    ("Services", SERVICES),
    ("Testimonials", TESTIMONIALS),
    ("Contact", CONTACT),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub handle: ScrollerHandle,
    /// Section currently on screen.
    pub active: usize,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { handle, active } = props;
    let menu_open = use_state(|| false);
    let theme = use_theme();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Jumps to a section and closes the burger menu.
    let go_to = |index: usize| {
        let handle = handle.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            handle.scroll_to(index);
        })
    };

    let toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*active != HERO).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 64px;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    @media (min-width: 768px) {
                        .top-nav {
                            height: 80px;
                        }
                    }
                    .top-nav.scrolled {
                        background: var(--nav-glass);
                        backdrop-filter: blur(14px);
                        border-bottom: 1px solid var(--border-subtle);
                    }
                    .nav-content {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.15rem;
                        color: var(--text-primary);
                        text-decoration: none;
                        cursor: pointer;
                        background: none;
                        border: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: var(--text-secondary);
                        text-decoration: none;
                        font-size: 0.9rem;
                        transition: color 0.2s;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: var(--text-primary);
                    }
                    .nav-link.active {
                        font-weight: 600;
                    }
                    .nav-cta {
                        padding: 0.5rem 1.1rem;
                        border: none;
                        border-radius: 999px;
                        color: white;
                        cursor: pointer;
                        background: linear-gradient(90deg, #7c3aed, #db2777);
                    }
                    .theme-toggle {
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        border: 1px solid var(--border-subtle);
                        background: transparent;
                        color: var(--text-primary);
                        cursor: pointer;
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
                        width: 22px;
                        height: 2px;
                        background: var(--text-primary);
                    }
                    @media (max-width: 767px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 64px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: var(--bg-card);
                            border-bottom: 1px solid var(--border-subtle);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to(HERO)}>
                    {"HustlersConnect"}
                </button>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|&(label, index)| html! {
                        <a
                            href="#"
                            class={classes!("nav-link", (index == *active).then(|| "active"))}
                            onclick={go_to(index)}
                        >
                            {label}
                        </a>
                    }) }
                    <button
                        class="theme-toggle"
                        aria-label={format!("Switch to {} mode", theme.theme.toggled())}
                        onclick={toggle_theme}
                    >
                        { if theme.theme == Theme::Dark { "☀" } else { "☾" } }
                    </button>
                    <button class="nav-cta" onclick={go_to(CONTACT)}>{"Let's talk"}</button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_map_to_consecutive_sections() {
        let indices: Vec<usize> = NAV_ITEMS.iter().map(|&(_, i)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}

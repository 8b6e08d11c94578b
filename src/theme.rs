use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use stylist::css;
use stylist::yew::Global;
use web_sys::window;
use yew::prelude::*;

use crate::storage::{KeyValueStore, LocalStore};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Stored choice first, then the OS preference, then dark.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(|s| s.parse().ok()) {
        return theme;
    }
    match prefers_dark {
        Some(false) => Theme::Light,
        _ => Theme::Dark,
    }
}

fn prefers_dark() -> Option<bool> {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
}

fn stored_theme(store: &impl KeyValueStore) -> Option<String> {
    match store.get(THEME_KEY) {
        Ok(value) => value,
        Err(e) => {
            debug!("Theme preference unavailable: {}", e);
            None
        }
    }
}

fn initial_theme(store: &impl KeyValueStore) -> Theme {
    resolve_theme(stored_theme(store).as_deref(), prefers_dark())
}

fn apply_to_document(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if result.is_err() {
        warn!("Could not apply {} theme class", theme);
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            toggle: Callback::noop(),
        }
    }
}

/// The surrounding theme, or an inert dark one outside a provider.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| initial_theme(&LocalStore));

    use_effect_with_deps(
        |theme: &Theme| {
            apply_to_document(*theme);
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            if let Err(e) = LocalStore.set(THEME_KEY, next.as_str()) {
                warn!("Failed to persist theme: {}", e);
            }
            debug!("Theme set to {}", next);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <Global css={global_style()} />
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Colours of the fixed page backdrop for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    pub base: &'static str,
    /// Glows at the top left, centre and bottom right.
    pub glows: [&'static str; 3],
    pub grid_line: &'static str,
    pub grid_size: &'static str,
    pub grid_opacity: f64,
    /// Dots on the grid intersections, light theme only.
    pub grid_dots: Option<&'static str>,
}

impl Backdrop {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Backdrop {
                base: "#010106",
                glows: [
                    "rgba(59, 78, 230, 0.07)",
                    "rgba(139, 42, 230, 0.05)",
                    "rgba(220, 38, 38, 0.04)",
                ],
                grid_line: "rgba(255, 255, 255, 0.025)",
                grid_size: "52px",
                grid_opacity: 0.7,
                grid_dots: None,
            },
            Theme::Light => Backdrop {
                base: "#eef0f8",
                glows: [
                    "rgba(99, 102, 241, 0.10)",
                    "rgba(139, 92, 246, 0.07)",
                    "rgba(239, 68, 68, 0.05)",
                ],
                grid_line: "rgba(99, 102, 241, 0.10)",
                grid_size: "48px",
                grid_opacity: 1.0,
                grid_dots: Some("rgba(99, 102, 241, 0.18)"),
            },
        }
    }

    fn grid_style(&self) -> String {
        format!(
            "background-image: linear-gradient({line} 1px, transparent 1px), \
             linear-gradient(90deg, {line} 1px, transparent 1px); \
             background-size: {size} {size}; opacity: {opacity};",
            line = self.grid_line,
            size = self.grid_size,
            opacity = self.grid_opacity,
        )
    }

    fn glow_style(&self) -> String {
        let [a, b, c] = self.glows;
        format!(
            "background: radial-gradient(ellipse 55% 50% at 12% 18%, {a} 0%, transparent 65%), \
             radial-gradient(ellipse 50% 45% at 55% 50%, {b} 0%, transparent 65%), \
             radial-gradient(ellipse 50% 45% at 88% 82%, {c} 0%, transparent 65%);"
        )
    }
}

/// Fixed layers behind every section: base colour, grid, glows.
#[function_component(ThemeBackground)]
pub fn theme_background() -> Html {
    let backdrop = Backdrop::for_theme(use_theme().theme);

    html! {
        <div class="theme-backdrop" aria-hidden="true">
            <style>
                {r#"
                    .theme-backdrop, .theme-backdrop div {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                    }
                    .theme-backdrop div {
                        transition: background-color 0.5s ease, opacity 0.5s ease;
                    }
                "#}
            </style>
            <div style={format!("background-color: {};", backdrop.base)}></div>
            <div style={backdrop.grid_style()}></div>
            <div style={backdrop.glow_style()}></div>
            if let Some(dots) = backdrop.grid_dots {
                <div style={format!(
                    "background-image: radial-gradient(circle, {} 1px, transparent 1px); \
                     background-size: {size} {size}; opacity: 0.6;",
                    dots,
                    size = backdrop.grid_size,
                )}></div>
            }
        </div>
    }
}

fn global_style() -> stylist::StyleSource {
    css!(
        r#"
        :root {
            --bg-primary: #ffffff;
            --bg-secondary: #f5f6fa;
            --bg-card: #ffffff;
            --text-primary: #0f1020;
            --text-secondary: #4b4f63;
            --text-muted: #8a8ea3;
            --border-subtle: rgba(15, 16, 32, 0.1);
            --accent: #6366f1;
            --nav-glass: rgba(255, 255, 255, 0.72);
        }
        html.dark {
            --bg-primary: #07070d;
            --bg-secondary: #0d0d16;
            --bg-card: #14141f;
            --text-primary: #f4f4f8;
            --text-secondary: #b4b6c6;
            --text-muted: #6e7086;
            --border-subtle: rgba(255, 255, 255, 0.08);
            --accent: #818cf8;
            --nav-glass: rgba(7, 7, 13, 0.72);
        }
        html, body {
            margin: 0;
            height: 100%;
            overflow: hidden;
            background: var(--bg-primary);
            color: var(--text-primary);
            font-family: 'Inter', system-ui, -apple-system, sans-serif;
            transition: background 0.3s ease, color 0.3s ease;
        }
        * {
            box-sizing: border-box;
        }
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn stored_choice_wins() {
        assert_eq!(resolve_theme(Some("light"), Some(true)), Theme::Light);
        assert_eq!(resolve_theme(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_preference_then_dark() {
        assert_eq!(resolve_theme(None, Some(false)), Theme::Light);
        assert_eq!(resolve_theme(None, Some(true)), Theme::Dark);
        assert_eq!(resolve_theme(Some("sepia"), None), Theme::Dark);
    }

    #[test]
    fn parse_and_toggle() {
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("blue".parse::<Theme>(), Err(UnknownTheme("blue".into())));
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }

    #[test]
    fn reads_stored_choice() {
        let store = MemoryStore::default();
        assert_eq!(stored_theme(&store), None);
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(stored_theme(&store).as_deref(), Some("light"));

        let broken = MemoryStore {
            unavailable: true,
            ..Default::default()
        };
        assert_eq!(stored_theme(&broken), None);
    }

    #[test]
    fn backdrop_follows_theme() {
        let dark = Backdrop::for_theme(Theme::Dark);
        let light = Backdrop::for_theme(Theme::Light);
        assert_eq!(dark.base, "#010106");
        assert_eq!(light.base, "#eef0f8");
        assert!(dark.grid_dots.is_none());
        assert!(light.grid_dots.is_some());
        assert!(light.grid_style().contains("48px 48px"));
        assert!(dark.glow_style().contains(dark.glows[2]));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// `aria-pressed` on the toggle reflects the light theme.
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Theme::Light => "true",
            Theme::Dark => "false",
        }
    }

    /// Theme the toggle flips to, given the current `data-theme` attribute.
    pub fn next_from_attr(attr: Option<&str>) -> Self {
        attr.and_then(Theme::parse).unwrap_or_default().toggled()
    }
}

/// Minimal key/value preference store (backed by `localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Stored value wins when it names a theme; otherwise dark.
pub fn resolve_theme<P: PreferenceStore + ?Sized>(store: &P, key: &str) -> Theme {
    store
        .get(key)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

pub fn persist_theme<P: PreferenceStore + ?Sized>(store: &mut P, key: &str, theme: Theme) {
    store.set(key, theme.as_str());
}

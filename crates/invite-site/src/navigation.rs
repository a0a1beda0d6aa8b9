//! Top navigation bar

use invite_core::NavigationConfig;

/// Page sections reachable from the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Gallery,
    Details,
    Rsvp,
}

impl Section {
    /// Bar order
    pub const ALL: [Section; 4] = [Self::Home, Self::Gallery, Self::Details, Self::Rsvp];

    /// Anchor id of the section
    #[inline]
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "hero",
            Self::Gallery => "gallery",
            Self::Details => "details",
            Self::Rsvp => "rsvp",
        }
    }

    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gallery => "Gallery",
            Self::Details => "Details",
            Self::Rsvp => "RSVP",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Bar state: shrunk once scrolled past the threshold, plus the mobile menu
#[derive(Debug, Clone)]
pub struct NavBar {
    config: NavigationConfig,
    scrolled: bool,
    menu_open: bool,
}

impl NavBar {
    #[must_use]
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            scrolled: false,
            menu_open: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[inline]
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Feed the vertical scroll offset; returns whether the state flipped
    pub fn on_scroll(&mut self, offset_px: f64) -> bool {
        let scrolled = offset_px > self.config.scroll_threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scroll offset that puts `section_top_px` just under the bar
    ///
    /// Closes the mobile menu. `bar_height_px` is the measured bar height;
    /// the configured fallback is used when it is unknown.
    pub fn scroll_target(&mut self, section_top_px: f64, bar_height_px: Option<f64>) -> f64 {
        self.menu_open = false;
        section_top_px - bar_height_px.unwrap_or(self.config.navbar_height_px)
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

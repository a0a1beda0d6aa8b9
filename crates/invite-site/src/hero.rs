//! Landing banner

use invite_core::EventConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub couple: String,
    pub tagline: String,
    pub date: String,
    /// `"Thursday | 9:00 AM onwards"`
    pub time_line: String,
    pub venue: String,
    pub hall: String,
    pub locality: String,
    visible: bool,
}

impl HeroView {
    #[must_use]
    pub fn from_event(event: &EventConfig) -> Self {
        Self {
            couple: event.couple.clone(),
            tagline: event.tagline.clone(),
            date: event.date.clone(),
            time_line: format!("{} | {} onwards", event.weekday, event.start_time),
            venue: event.venue.clone(),
            hall: event.hall.clone(),
            locality: event.locality.clone(),
            visible: false,
        }
    }

    /// Fade in once mounted
    pub fn mount(&mut self) {
        self.visible = true;
    }

    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl std::fmt::Display for HeroView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.couple)?;
        writeln!(f, "{}", self.tagline)?;
        writeln!(f, "{}", self.date)?;
        writeln!(f, "{}", self.time_line)?;
        writeln!(f, "at {}", self.venue)?;
        writeln!(f, "{}", self.hall)?;
        writeln!(f, "{}", self.locality)
    }
}

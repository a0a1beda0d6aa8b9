//! Event details section and directions link

use invite_core::EventConfig;

pub const DETAILS_HEADING: &str = "Event Details";
pub const DETAILS_SUBHEADING: &str =
    "All the important information you need to join us on our special day";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    /// `"Thursday, October 02, 2025"`
    pub date_line: String,
    /// `"From 9:00 AM onwards"`
    pub time_line: String,
    pub venue_lines: [String; 3],
    directions_url: String,
}

impl EventDetails {
    #[must_use]
    pub fn from_event(event: &EventConfig) -> Self {
        Self {
            date_line: format!("{}, {}", event.weekday, event.date),
            time_line: format!("From {} onwards", event.start_time),
            venue_lines: [
                event.venue.clone(),
                event.hall.clone(),
                event.locality.clone(),
            ],
            directions_url: directions_url(event),
        }
    }

    /// Target of "Get Directions"
    #[inline]
    #[must_use]
    pub fn directions_url(&self) -> &str {
        &self.directions_url
    }
}

/// Maps search URL with the venue address percent-encoded
#[must_use]
pub fn directions_url(event: &EventConfig) -> String {
    format!(
        "{}{}",
        event.maps_search_url,
        urlencoding::encode(&event.address())
    )
}

impl std::fmt::Display for EventDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{DETAILS_HEADING}")?;
        writeln!(f, "  Date:  {}", self.date_line)?;
        writeln!(f, "  Time:  {}", self.time_line)?;
        writeln!(f, "  Venue: {}", self.venue_lines.join(", "))?;
        writeln!(f, "  Get Directions: {}", self.directions_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn directions_url_encodes_address() {
        let url = directions_url(&EventConfig::default());
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=\
             Hotel%20Green%20Court%2C%20Grand%20Ballroom%2C%20Homagama%2C%20Sri%20Lanka"
        );
    }

    #[test]
    fn lines_from_config() {
        let details = EventDetails::from_event(&EventConfig::default());
        assert_eq!(details.date_line, "Thursday, October 02, 2025");
        assert_eq!(details.time_line, "From 9:00 AM onwards");
        assert_eq!(details.venue_lines[0], "Hotel Green Court");
    }
}

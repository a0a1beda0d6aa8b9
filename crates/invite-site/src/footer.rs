use invite_core::{EventConfig, FooterConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub couple: String,
    pub message: String,
    pub copyright: String,
}

impl FooterView {
    #[must_use]
    pub fn new(event: &EventConfig, footer: &FooterConfig) -> Self {
        Self {
            couple: event.couple.clone(),
            message: footer.message.clone(),
            copyright: footer.copyright.clone(),
        }
    }
}

impl std::fmt::Display for FooterView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.couple)?;
        writeln!(f, "{}", self.message)?;
        writeln!(f, "{}", self.copyright)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Service = 0,
    Details = 1,
    Contact = 2,
    Review = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [Self::Service, Self::Details, Self::Contact, Self::Review];

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Maps any integer onto a step, clamping into `Service..=Review`.
    pub fn from_index(index: i64) -> Self {
        match index {
            i64::MIN..=0 => Self::Service,
            1 => Self::Details,
            2 => Self::Contact,
            _ => Self::Review,
        }
    }

    /// Reads the `step` query parameter of a deep link.
    ///
    /// The value is untrusted: missing or non-numeric input starts at
    /// `Service`, out-of-range numbers are clamped.
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(Self::from_index)
            .unwrap_or(Self::Service)
    }

    /// The following step; `Review` stays `Review`.
    pub fn next(&self) -> Self {
        Self::from_index(i64::from(self.index()) + 1)
    }

    /// The preceding step; `Service` stays `Service`.
    pub fn prev(&self) -> Self {
        Self::from_index(i64::from(self.index()) - 1)
    }

    /// Share of the flow reached, for the progress bar.
    pub fn progress_percent(&self) -> u8 {
        (self.index() + 1) * 25
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Details => "Details",
            Self::Contact => "Contact",
            Self::Review => "Review",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Which way the last step change went; drives slide transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn between(
        from: WizardStep,
        to: WizardStep,
    ) -> Self {
        if to > from { Self::Forward } else { Self::Backward }
    }
}

/// `Quote` is the price-first entry point: no budget question, live price
/// sidebar visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardMode {
    #[default]
    Standard,
    Quote,
}

impl WizardMode {
    /// Reads the `mode` query parameter; only `quote` selects quote mode.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("quote") => Self::Quote,
            _ => Self::Standard,
        }
    }

    pub fn asks_budget(&self) -> bool {
        matches!(self, Self::Standard)
    }

    pub fn shows_live_quote(&self) -> bool {
        matches!(self, Self::Quote)
    }
}

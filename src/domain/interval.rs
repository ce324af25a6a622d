use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Sampling interval for a historical query, using the provider's shorthand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    /// Provider-side shorthand (`1d`, `1wk`, `1mo`).
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn shorthand_matches_provider_vocabulary() {
        let all: Vec<&str> = Interval::iter().map(Interval::as_str).collect();
        assert_eq!(all, vec!["1d", "1wk", "1mo"]);
    }

    #[test]
    fn display_uses_shorthand() {
        assert_eq!(Interval::Weekly.to_string(), "1wk");
    }
}

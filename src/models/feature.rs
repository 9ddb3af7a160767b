use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Collection tag selecting which dataset the portal displays.
///
/// Declaration order is the sidebar order; the first variant is the
/// initial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Dsa,
    Requirements,
    Roadmap,
    Experience,
}

impl Feature {
    pub const ALL: [Feature; 4] =
        [Feature::Dsa, Feature::Requirements, Feature::Roadmap, Feature::Experience];

    /// Stable lower-case identifier, also accepted on the command line
    pub fn id(self) -> &'static str {
        match self {
            Feature::Dsa => "dsa",
            Feature::Requirements => "requirements",
            Feature::Roadmap => "roadmap",
            Feature::Experience => "experience",
        }
    }

    /// Sidebar entry label
    pub fn title(self) -> &'static str {
        match self {
            Feature::Dsa => "DSA Questions",
            Feature::Requirements => "Job Requirements",
            Feature::Roadmap => "Career Roadmap",
            Feature::Experience => "Interview Experience",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::Dsa => "Company-tagged DSA questions (30 questions)",
            Feature::Requirements => "Insights into job requirements",
            Feature::Roadmap => "Personalized career roadmaps",
            Feature::Experience => "Company-specific interview experiences",
        }
    }

    /// Heading shown above the card list
    pub fn heading(self) -> &'static str {
        match self {
            Feature::Dsa => "DSA Questions with Company Tags",
            Feature::Requirements => "Job Requirement Insights",
            Feature::Roadmap => "Personalized Career Roadmaps",
            Feature::Experience => "Interview Experiences",
        }
    }

    /// Position in the sidebar (0-based)
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next tag in sidebar order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tag in sidebar order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_declared() {
        assert_eq!(Feature::default(), Feature::Dsa);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Feature::Dsa.next(), Feature::Requirements);
        assert_eq!(Feature::Experience.next(), Feature::Dsa);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(Feature::Dsa.prev(), Feature::Experience);
        assert_eq!(Feature::Roadmap.prev(), Feature::Requirements);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Feature::ALL.iter().map(|f| f.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&Feature::Roadmap).unwrap();
        assert_eq!(json, "\"roadmap\"");
    }
}

//! Card construction for the active collection.
//!
//! Cards are plain data describing one record each. The TUI styles them and
//! the CLI prints their plain-text form, so layout decisions (which labels,
//! which badge, where the roadmap connector goes) live here once.

use super::view::FilteredView;
use crate::models::{
    Difficulty, InterviewExperience, JobRequirement, PracticeQuestion, RoadmapStep,
};

/// Colour family for a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
}

impl From<Difficulty> for BadgeTone {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => BadgeTone::Success,
            Difficulty::Medium => BadgeTone::Warning,
            Difficulty::Hard => BadgeTone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub tone: BadgeTone,
}

/// One body element of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBlock {
    /// `label value` on a single line; no label means free text
    Field { label: Option<&'static str>, value: String },
    /// Heading followed by a bulleted list
    Bullets { heading: &'static str, items: Vec<String> },
    /// Optional heading followed by inline chips
    Chips { heading: Option<&'static str>, items: Vec<String> },
}

/// One rendered unit for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    /// Right-aligned text in the title row
    pub aside: Option<String>,
    pub badge: Option<Badge>,
    pub blocks: Vec<CardBlock>,
    /// Draw a continuation marker below this card
    pub connector: bool,
}

impl Card {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            aside: None,
            badge: None,
            blocks: Vec::new(),
            connector: false,
        }
    }

    /// Plain-text rendering, used for the clipboard and CLI output
    pub fn to_plain_text(&self) -> String {
        let mut head = self.title.clone();
        if let Some(aside) = &self.aside {
            head.push_str(" | ");
            head.push_str(aside);
        }
        if let Some(badge) = &self.badge {
            head.push_str(&format!(" [{}]", badge.text));
        }

        let mut lines = vec![head];
        if let Some(subtitle) = &self.subtitle {
            lines.push(subtitle.clone());
        }

        for block in &self.blocks {
            match block {
                CardBlock::Field { label: Some(label), value } => {
                    lines.push(format!("{} {}", label, value));
                }
                CardBlock::Field { label: None, value } => lines.push(value.clone()),
                CardBlock::Bullets { heading, items } => {
                    lines.push(heading.to_string());
                    lines.extend(items.iter().map(|item| format!("  • {}", item)));
                }
                CardBlock::Chips { heading, items } => {
                    if let Some(heading) = heading {
                        lines.push(heading.to_string());
                    }
                    let chips: Vec<String> = items.iter().map(|i| format!("[{}]", i)).collect();
                    lines.push(chips.join(" "));
                }
            }
        }

        lines.join("\n")
    }
}

/// Build the cards for a filtered view, one per visible record
pub fn build_cards(view: &FilteredView<'_>) -> Vec<Card> {
    match view {
        FilteredView::Questions(items) => items.iter().map(|q| question_card(q)).collect(),
        FilteredView::Requirements(items) => items.iter().map(|j| requirement_card(j)).collect(),
        FilteredView::Roadmap(items) => {
            let last = items.len().saturating_sub(1);
            items.iter().enumerate().map(|(idx, step)| roadmap_card(step, idx != last)).collect()
        }
        FilteredView::Experiences(items) => items.iter().map(|e| experience_card(e)).collect(),
    }
}

fn question_card(question: &PracticeQuestion) -> Card {
    let mut card = Card::new(&question.title);
    card.subtitle = Some(format!("Company: {}", question.company));
    card.badge = Some(Badge {
        text: question.difficulty.to_string(),
        tone: BadgeTone::from(question.difficulty),
    });
    card.blocks.push(CardBlock::Field { label: Some("Category:"), value: question.category.clone() });
    card
}

fn requirement_card(job: &JobRequirement) -> Card {
    let mut card = Card::new(&job.company);
    card.aside = Some(job.role.clone());
    card.blocks.push(CardBlock::Field { label: Some("Experience:"), value: job.experience.clone() });
    card.blocks
        .push(CardBlock::Bullets { heading: "Requirements:", items: job.requirements.clone() });
    card
}

fn roadmap_card(step: &RoadmapStep, connector: bool) -> Card {
    let mut card = Card::new(&step.title);
    card.blocks.push(CardBlock::Field { label: None, value: step.description.clone() });
    card.blocks.push(CardBlock::Field { label: Some("Timeframe:"), value: step.timeframe.clone() });
    card.blocks.push(CardBlock::Chips { heading: None, items: step.skills.clone() });
    card.connector = connector;
    card
}

fn experience_card(exp: &InterviewExperience) -> Card {
    let mut card = Card::new(&exp.company);
    card.subtitle = Some(exp.role.clone());
    card.aside = Some(exp.date.clone());
    card.blocks.push(CardBlock::Chips { heading: Some("Interview Rounds:"), items: exp.rounds.clone() });
    card.blocks
        .push(CardBlock::Bullets { heading: "Sample Questions:", items: exp.questions.clone() });
    card.blocks.push(CardBlock::Field { label: Some("Tips:"), value: exp.tips.clone() });
    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::models::Feature;

    #[test]
    fn test_question_card_layout() {
        let store = ContentStore::builtin();
        let view = FilteredView::new(&store, Feature::Dsa, "lru");
        let cards = build_cards(&view);

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.title, "LRU Cache");
        assert_eq!(card.subtitle.as_deref(), Some("Company: Microsoft"));
        assert_eq!(card.badge, Some(Badge { text: "Medium".to_string(), tone: BadgeTone::Warning }));
        assert!(!card.connector);
    }

    #[test]
    fn test_difficulty_tones() {
        assert_eq!(BadgeTone::from(Difficulty::Easy), BadgeTone::Success);
        assert_eq!(BadgeTone::from(Difficulty::Medium), BadgeTone::Warning);
        assert_eq!(BadgeTone::from(Difficulty::Hard), BadgeTone::Danger);
    }

    #[test]
    fn test_roadmap_connector_omitted_after_last() {
        let store = ContentStore::builtin();
        let view = FilteredView::new(&store, Feature::Roadmap, "");
        let cards = build_cards(&view);

        assert_eq!(cards.len(), 2);
        assert!(cards[0].connector);
        assert!(!cards[1].connector);
    }

    #[test]
    fn test_roadmap_single_visible_step_has_no_connector() {
        let store = ContentStore::builtin();
        let view = FilteredView::new(&store, Feature::Roadmap, "foundation");
        let cards = build_cards(&view);

        assert_eq!(cards.len(), 1);
        assert!(!cards[0].connector);
    }

    #[test]
    fn test_empty_view_builds_no_cards() {
        let store = ContentStore::builtin();
        let view = FilteredView::new(&store, Feature::Roadmap, "nothing matches this");
        assert!(build_cards(&view).is_empty());
    }

    #[test]
    fn test_experience_plain_text() {
        let store = ContentStore::builtin();
        let view = FilteredView::new(&store, Feature::Experience, "amazon");
        let text = build_cards(&view)[0].to_plain_text();

        assert!(text.starts_with("Amazon | 2024\nSDE II"));
        assert!(text.contains("Interview Rounds:\n[Online Assessment] [Technical]"));
        assert!(text.contains("  • Design a rate limiter"));
        assert!(text.ends_with("Tips: Focus on leadership principles and system design"));
    }

    #[test]
    fn test_requirement_plain_text() {
        let store = ContentStore::builtin();
        let view = FilteredView::new(&store, Feature::Requirements, "meta");
        let text = build_cards(&view)[0].to_plain_text();

        assert!(text.starts_with("Meta | Frontend Engineer\nExperience: 2+ years\nRequirements:"));
        assert!(text.contains("  • React expertise"));
    }
}

//! Field identifiers and text accessors for each record kind.
//!
//! Every searchable record declares an enum of its fields and maps each
//! variant to the field's textual form. Searches then name any subset of
//! those variants instead of looking properties up by string at runtime.

use std::borrow::Cow;

use anyhow::{Result, bail};

use crate::models::{InterviewExperience, JobRequirement, PracticeQuestion, RoadmapStep};

/// A field identifier with a stable lower-case name
pub trait FieldName: Copy + Eq + std::fmt::Debug + 'static {
    fn name(self) -> &'static str;
}

/// A record whose fields can be matched by the filter engine
pub trait Searchable {
    type Field: FieldName;

    /// Every field of this record kind, in declaration order
    const ALL_FIELDS: &'static [Self::Field];

    /// Fields the portal searches when the caller names none
    const DEFAULT_FIELDS: &'static [Self::Field];

    /// Textual form of `field`; lists are joined with `,`
    fn field_text(&self, field: Self::Field) -> Cow<'_, str>;
}

/// Resolve field names to identifiers for record kind `R`
///
/// An empty `names` slice yields `R::DEFAULT_FIELDS`. Names are matched
/// case-insensitively; duplicates are kept once.
pub fn parse_fields<R: Searchable>(names: &[String]) -> Result<Vec<R::Field>> {
    if names.is_empty() {
        return Ok(R::DEFAULT_FIELDS.to_vec());
    }

    let mut fields = Vec::with_capacity(names.len());
    for name in names {
        let wanted = name.trim().to_lowercase();
        match R::ALL_FIELDS.iter().find(|f| f.name() == wanted) {
            Some(field) => {
                if !fields.contains(field) {
                    fields.push(*field);
                }
            }
            None => {
                let valid: Vec<&str> = R::ALL_FIELDS.iter().map(|f| f.name()).collect();
                bail!("Unknown field '{}'. Valid fields: {}", name, valid.join(", "));
            }
        }
    }

    Ok(fields)
}

fn joined(items: &[String]) -> Cow<'_, str> {
    Cow::Owned(items.join(","))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    Id,
    Title,
    Company,
    Difficulty,
    Category,
}

impl FieldName for QuestionField {
    fn name(self) -> &'static str {
        match self {
            QuestionField::Id => "id",
            QuestionField::Title => "title",
            QuestionField::Company => "company",
            QuestionField::Difficulty => "difficulty",
            QuestionField::Category => "category",
        }
    }
}

impl Searchable for PracticeQuestion {
    type Field = QuestionField;

    const ALL_FIELDS: &'static [QuestionField] = &[
        QuestionField::Id,
        QuestionField::Title,
        QuestionField::Company,
        QuestionField::Difficulty,
        QuestionField::Category,
    ];

    const DEFAULT_FIELDS: &'static [QuestionField] =
        &[QuestionField::Title, QuestionField::Company, QuestionField::Category];

    fn field_text(&self, field: QuestionField) -> Cow<'_, str> {
        match field {
            QuestionField::Id => Cow::Owned(self.id.to_string()),
            QuestionField::Title => Cow::Borrowed(&self.title),
            QuestionField::Company => Cow::Borrowed(&self.company),
            QuestionField::Difficulty => Cow::Borrowed(self.difficulty.as_str()),
            QuestionField::Category => Cow::Borrowed(&self.category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementField {
    Company,
    Role,
    Requirements,
    Experience,
}

impl FieldName for RequirementField {
    fn name(self) -> &'static str {
        match self {
            RequirementField::Company => "company",
            RequirementField::Role => "role",
            RequirementField::Requirements => "requirements",
            RequirementField::Experience => "experience",
        }
    }
}

impl Searchable for JobRequirement {
    type Field = RequirementField;

    const ALL_FIELDS: &'static [RequirementField] = &[
        RequirementField::Company,
        RequirementField::Role,
        RequirementField::Requirements,
        RequirementField::Experience,
    ];

    const DEFAULT_FIELDS: &'static [RequirementField] =
        &[RequirementField::Company, RequirementField::Role];

    fn field_text(&self, field: RequirementField) -> Cow<'_, str> {
        match field {
            RequirementField::Company => Cow::Borrowed(&self.company),
            RequirementField::Role => Cow::Borrowed(&self.role),
            RequirementField::Requirements => joined(&self.requirements),
            RequirementField::Experience => Cow::Borrowed(&self.experience),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapField {
    Title,
    Description,
    Timeframe,
    Skills,
}

impl FieldName for RoadmapField {
    fn name(self) -> &'static str {
        match self {
            RoadmapField::Title => "title",
            RoadmapField::Description => "description",
            RoadmapField::Timeframe => "timeframe",
            RoadmapField::Skills => "skills",
        }
    }
}

impl Searchable for RoadmapStep {
    type Field = RoadmapField;

    const ALL_FIELDS: &'static [RoadmapField] = &[
        RoadmapField::Title,
        RoadmapField::Description,
        RoadmapField::Timeframe,
        RoadmapField::Skills,
    ];

    const DEFAULT_FIELDS: &'static [RoadmapField] =
        &[RoadmapField::Title, RoadmapField::Description];

    fn field_text(&self, field: RoadmapField) -> Cow<'_, str> {
        match field {
            RoadmapField::Title => Cow::Borrowed(&self.title),
            RoadmapField::Description => Cow::Borrowed(&self.description),
            RoadmapField::Timeframe => Cow::Borrowed(&self.timeframe),
            RoadmapField::Skills => joined(&self.skills),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Role,
    Date,
    Rounds,
    Questions,
    Tips,
}

impl FieldName for ExperienceField {
    fn name(self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Role => "role",
            ExperienceField::Date => "date",
            ExperienceField::Rounds => "rounds",
            ExperienceField::Questions => "questions",
            ExperienceField::Tips => "tips",
        }
    }
}

impl Searchable for InterviewExperience {
    type Field = ExperienceField;

    const ALL_FIELDS: &'static [ExperienceField] = &[
        ExperienceField::Company,
        ExperienceField::Role,
        ExperienceField::Date,
        ExperienceField::Rounds,
        ExperienceField::Questions,
        ExperienceField::Tips,
    ];

    const DEFAULT_FIELDS: &'static [ExperienceField] =
        &[ExperienceField::Company, ExperienceField::Role];

    fn field_text(&self, field: ExperienceField) -> Cow<'_, str> {
        match field {
            ExperienceField::Company => Cow::Borrowed(&self.company),
            ExperienceField::Role => Cow::Borrowed(&self.role),
            ExperienceField::Date => Cow::Borrowed(&self.date),
            ExperienceField::Rounds => joined(&self.rounds),
            ExperienceField::Questions => joined(&self.questions),
            ExperienceField::Tips => Cow::Borrowed(&self.tips),
        }
    }
}

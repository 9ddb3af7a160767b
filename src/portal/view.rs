use anyhow::Result;

use crate::content::ContentStore;
use crate::filters::{Searchable, filter_records, parse_fields};
use crate::models::{
    Feature, InterviewExperience, JobRequirement, PracticeQuestion, RoadmapStep,
};

/// Filtered records of the active collection, borrowed from the store
#[derive(Debug, Clone, PartialEq)]
pub enum FilteredView<'a> {
    Questions(Vec<&'a PracticeQuestion>),
    Requirements(Vec<&'a JobRequirement>),
    Roadmap(Vec<&'a RoadmapStep>),
    Experiences(Vec<&'a InterviewExperience>),
}

impl<'a> FilteredView<'a> {
    /// Apply `query` to the collection behind `feature` using its default fields
    pub fn new(store: &'a ContentStore, feature: Feature, query: &str) -> Self {
        match feature {
            Feature::Dsa => Self::Questions(filter_records(
                store.questions(),
                query,
                PracticeQuestion::DEFAULT_FIELDS,
            )),
            Feature::Requirements => Self::Requirements(filter_records(
                store.requirements(),
                query,
                JobRequirement::DEFAULT_FIELDS,
            )),
            Feature::Roadmap => {
                Self::Roadmap(filter_records(store.roadmap(), query, RoadmapStep::DEFAULT_FIELDS))
            }
            Feature::Experience => Self::Experiences(filter_records(
                store.experiences(),
                query,
                InterviewExperience::DEFAULT_FIELDS,
            )),
        }
    }

    /// Like [`FilteredView::new`], but searching the fields named in `field_names`
    ///
    /// An empty `field_names` falls back to the collection's default fields.
    /// Fails when a name is not a field of the chosen record kind.
    pub fn with_fields(
        store: &'a ContentStore,
        feature: Feature,
        query: &str,
        field_names: &[String],
    ) -> Result<Self> {
        let view = match feature {
            Feature::Dsa => {
                let fields = parse_fields::<PracticeQuestion>(field_names)?;
                Self::Questions(filter_records(store.questions(), query, &fields))
            }
            Feature::Requirements => {
                let fields = parse_fields::<JobRequirement>(field_names)?;
                Self::Requirements(filter_records(store.requirements(), query, &fields))
            }
            Feature::Roadmap => {
                let fields = parse_fields::<RoadmapStep>(field_names)?;
                Self::Roadmap(filter_records(store.roadmap(), query, &fields))
            }
            Feature::Experience => {
                let fields = parse_fields::<InterviewExperience>(field_names)?;
                Self::Experiences(filter_records(store.experiences(), query, &fields))
            }
        };
        Ok(view)
    }

    pub fn feature(&self) -> Feature {
        match self {
            Self::Questions(_) => Feature::Dsa,
            Self::Requirements(_) => Feature::Requirements,
            Self::Roadmap(_) => Feature::Roadmap,
            Self::Experiences(_) => Feature::Experience,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Questions(items) => items.len(),
            Self::Requirements(items) => items.len(),
            Self::Roadmap(items) => items.len(),
            Self::Experiences(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the visible records as a JSON array
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Questions(items) => serde_json::to_value(items),
            Self::Requirements(items) => serde_json::to_value(items),
            Self::Roadmap(items) => serde_json::to_value(items),
            Self::Experiences(items) => serde_json::to_value(items),
        }
    }
}

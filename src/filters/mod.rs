pub mod apply;
pub mod fields;

pub use apply::{filter_records, matches_record};
pub use fields::{
    ExperienceField, FieldName, QuestionField, RequirementField, RoadmapField, Searchable,
    parse_fields,
};

use super::fields::Searchable;

/// Filter records by case-insensitive substring match on the named fields
///
/// - Empty query: every record is kept, in order
/// - Otherwise a record is kept when at least one of `fields` contains the
///   query, ignoring case
///
/// The result borrows from `records` and preserves their relative order;
/// `records` itself is never touched.
pub fn filter_records<'a, R: Searchable>(
    records: &'a [R],
    query: &str,
    fields: &[R::Field],
) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records.iter().filter(|record| matches_record(*record, &needle, fields)).collect()
}

/// Whether any of `fields` on `record` contains the already lower-cased needle
pub fn matches_record<R: Searchable>(record: &R, lowered_query: &str, fields: &[R::Field]) -> bool {
    fields
        .iter()
        .any(|field| record.field_text(*field).to_lowercase().contains(lowered_query))
}

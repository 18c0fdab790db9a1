use crate::parts::Suggestion;

/// Candidates whose name contains `query`, ignoring case, in original order.
///
/// An empty query keeps every candidate: the list opens as soon as the
/// trigger is typed.
pub fn filter_suggestions<'s>(candidates: &'s [Suggestion], query: &str) -> Vec<&'s Suggestion> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.name.to_lowercase().contains(&query))
        .collect()
}

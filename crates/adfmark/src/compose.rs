//! Composition of multi-part structured fields.

use crate::blocks::HEADING_2_MARKER;

/// Append acceptance criteria to a description under a level-2 heading.
///
/// Blank or missing criteria leave the description as is; a missing
/// description composes as the empty string.
pub fn compose_description(
    description: Option<&str>,
    acceptance_criteria: Option<&str>,
    heading: &str,
) -> String {
    let mut composed = description.unwrap_or_default().to_string();

    let Some(criteria) = acceptance_criteria.filter(|c| !c.trim().is_empty()) else {
        return composed;
    };

    composed.push_str("\n\n");
    composed.push_str(HEADING_2_MARKER);
    composed.push_str(heading.trim());
    composed.push('\n');
    composed.push_str(criteria);
    composed
}

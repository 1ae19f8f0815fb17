//! Readable field extraction from Linked Art object records.
//!
//! Each rule is an independent projection over the record. A missing
//! intermediate structure yields `None` or an empty list, and
//! [`extract_artwork_info`] fills in the documented defaults.

use crate::models::{
    DimensionInfo, ExtractedInfo, ImageInfo, LinkedArtObject, Term, UNKNOWN_UNIT,
};

/// Extract readable information from a Linked Art record.
///
/// Never fails: every field falls back to its default when the record does
/// not carry it. `techniques` is always empty because no Linked Art field
/// maps onto it.
pub fn extract_artwork_info(record: &LinkedArtObject) -> ExtractedInfo {
    let mut info = ExtractedInfo {
        id: record.id.clone().unwrap_or_default(),
        ..ExtractedInfo::default()
    };

    if let Some(title) = extract_title(record) {
        info.title = title;
    }
    if let Some(creator) = extract_creator(record) {
        info.creator = creator;
    }
    if let Some(date) = extract_date(record) {
        info.date = date;
    }
    info.materials = extract_materials(record);
    info.images = extract_images(record);
    info.dimensions = extract_dimensions(record);

    info
}

/// Content of the first name statement classified as a title or name.
///
/// The classification match is a case-insensitive substring test on the
/// label, so "Primary Title" and "Preferred Name" both qualify.
pub fn extract_title(record: &LinkedArtObject) -> Option<String> {
    let statements = record.identified_by.as_ref()?;
    let statement = statements.iter().find(|statement| {
        statement
            .classified_as
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(is_title_classification)
    })?;
    statement.content.clone()
}

fn is_title_classification(term: &Term) -> bool {
    term.label
        .as_deref()
        .map(str::to_lowercase)
        .is_some_and(|label| label.contains("title") || label.contains("name"))
}

/// Labels of the production agents, joined with ", ".
pub fn extract_creator(record: &LinkedArtObject) -> Option<String> {
    let agents = record.produced_by.as_ref()?.carried_out_by.as_ref()?;
    let names = labels(agents);
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// Production time span rendered as "begin - end", trimmed.
///
/// A missing side renders as an empty string, so a begin-only span gives
/// "1889-01-01 -".
pub fn extract_date(record: &LinkedArtObject) -> Option<String> {
    let span = record.produced_by.as_ref()?.timespan.as_ref()?;
    let begin = span.begin_of_the_begin.as_deref().filter(|s| !s.is_empty());
    let end = span.end_of_the_end.as_deref().filter(|s| !s.is_empty());
    if begin.is_none() && end.is_none() {
        return None;
    }
    let date = format!("{} - {}", begin.unwrap_or_default(), end.unwrap_or_default());
    Some(date.trim().to_string())
}

/// Labels of the materials the object is made of.
pub fn extract_materials(record: &LinkedArtObject) -> Vec<String> {
    record.made_of.as_deref().map(labels).unwrap_or_default()
}

/// Digital-object representations as image entries.
pub fn extract_images(record: &LinkedArtObject) -> Vec<ImageInfo> {
    record
        .representation
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|rep| rep.is_digital_object())
        .map(|rep| ImageInfo {
            url: rep.id.clone(),
            label: rep.label.clone(),
            format: rep.format.clone(),
        })
        .collect()
}

/// Dimensions with their unit label, or "unknown" when unlabelled.
pub fn extract_dimensions(record: &LinkedArtObject) -> Vec<DimensionInfo> {
    record
        .dimension
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|dim| DimensionInfo {
            kind: dim.kind.clone(),
            value: dim.value.clone(),
            unit: dim
                .unit
                .as_ref()
                .and_then(|unit| unit.label.clone())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| UNKNOWN_UNIT.to_string()),
        })
        .collect()
}

fn labels(terms: &[Term]) -> Vec<String> {
    terms
        .iter()
        .filter_map(|term| term.label.clone())
        .filter(|label| !label.is_empty())
        .collect()
}

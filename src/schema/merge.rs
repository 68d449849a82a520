//! Deduplication, union collapse and sibling merging

use super::types::{ObjectSchema, Schema};
use indexmap::IndexMap;

/// Drop structural duplicates, keeping first-seen order
pub fn unique_schemas(schemas: Vec<Schema>) -> Vec<Schema> {
    let mut unique: Vec<Schema> = Vec::with_capacity(schemas.len());
    for schema in schemas {
        if !unique.contains(&schema) {
            unique.push(schema);
        }
    }
    unique
}

/// Collapse candidates into one schema
///
/// A single distinct candidate is returned as-is, two or more become a
/// `oneOf` in first-seen order. Callers always pass at least one candidate.
pub fn one_of(schemas: Vec<Schema>) -> Schema {
    debug_assert!(!schemas.is_empty(), "one_of needs at least one candidate");

    let mut unique = unique_schemas(schemas);
    if unique.len() == 1 {
        unique.remove(0)
    } else {
        Schema::OneOf(unique)
    }
}

/// Merge sibling schemas coming from one list's children
///
/// All object schemas fold into a single object placed first; the
/// remaining schemas follow, deduplicated in first-seen order.
pub fn merge_schemas(schemas: Vec<Schema>) -> Vec<Schema> {
    let (objects, others): (Vec<_>, Vec<_>) = schemas.into_iter().partition(Schema::is_object);

    tracing::trace!(
        objects = objects.len(),
        others = others.len(),
        "merging sibling schemas"
    );

    let mut merged = Vec::with_capacity(1 + others.len());
    if !objects.is_empty() {
        merged.push(merge_objects(&objects));
    }
    merged.extend(unique_schemas(others));
    merged
}

/// Merge object schemas into one closed object schema
///
/// Each key maps to the union of the distinct value schemas seen for it.
/// A key is required iff every merged object lists it. Open objects
/// contribute no keys but still count as merged objects.
pub fn merge_objects(objects: &[Schema]) -> Schema {
    let mut seen: IndexMap<&str, (usize, Vec<Schema>)> = IndexMap::new();

    for object in objects {
        let Some(properties) = object.properties() else {
            continue;
        };
        for (key, value) in properties {
            let (count, values) = seen.entry(key.as_str()).or_default();
            *count += 1;
            if !values.contains(value) {
                values.push(value.clone());
            }
        }
    }

    let required: Vec<String> = seen
        .iter()
        .filter(|(_, (count, _))| *count == objects.len())
        .map(|(key, _)| (*key).to_string())
        .collect();

    let properties = (!seen.is_empty()).then(|| {
        seen.into_iter()
            .map(|(key, (_, values))| (key.to_string(), one_of(values)))
            .collect::<IndexMap<_, _>>()
    });

    Schema::Object(ObjectSchema::Closed {
        properties,
        required,
    })
}

//! Ordering - Caller-selected sort keys from an allow-list

use core::cmp::Ordering;

use super::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderKey<F> {
    pub field: F,
    pub descending: bool,
}

impl<F> OrderKey<F> {
    pub const fn asc(field: F) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub const fn desc(field: F) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

/// Parse a comma-separated `ordering` value such as `-level,xp`.
///
/// Returns `Ok(None)` when the value names no field at all, so the caller
/// falls back to its default. Any name outside `allowed` is rejected.
pub fn parse_ordering<F: Copy>(
    raw: &str,
    allowed: &[(&'static str, F)],
) -> Result<Option<Vec<OrderKey<F>>>, QueryError> {
    let mut keys = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (name, descending) = match token.strip_prefix('-') {
            Some(name) => (name, true),
            None => (token, false),
        };

        let field = allowed
            .iter()
            .find(|(allowed_name, _)| *allowed_name == name)
            .map(|(_, field)| *field)
            .ok_or_else(|| QueryError::UnknownOrderingField {
                field: name.to_string(),
                allowed: allowed.iter().map(|(n, _)| *n).collect(),
            })?;

        keys.push(OrderKey { field, descending });
    }

    Ok(if keys.is_empty() { None } else { Some(keys) })
}

/// Apply direction to an ascending comparison
pub(crate) fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

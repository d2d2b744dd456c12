//! ListQuery - A lazy, restartable description of a filtered listing
//!
//! Building a query only parses parameters; it never touches a store.
//! The store (or anything holding the records) evaluates it later, as many
//! times as it likes.
//!
//! ```text
//! QueryParams ──build──▶ ListQuery<R> ──evaluate(rows)──▶ Vec<R>
//!                         predicates AND search, then ordering
//! ```

use core::cmp::Ordering;
use core::marker::PhantomData;

use super::filter::{FieldValue, FilterSpec, Predicate};
use super::ordering::{directed, parse_ordering, OrderKey};
use super::params::QueryParams;
use super::search::SearchTerms;
use super::QueryError;

/// Parameter carrying the free-text search
pub const SEARCH_PARAM: &str = "search";
/// Parameter carrying the ordering
pub const ORDERING_PARAM: &str = "ordering";

/// Everything a listing accepts for one kind of record
#[derive(Debug)]
pub struct QuerySchema<F: 'static> {
    pub filters: &'static [FilterSpec<F>],
    pub search_fields: &'static [F],
    pub ordering_fields: &'static [(&'static str, F)],
    pub default_ordering: &'static [OrderKey<F>],
}

/// A record that can be filtered, searched and ordered
pub trait Record {
    type Field: Copy + Eq + core::fmt::Debug + 'static;

    fn schema() -> &'static QuerySchema<Self::Field>;

    fn field(&self, field: Self::Field) -> FieldValue<'_>;

    /// Identity, used as the last tie-break so every ordering is total
    fn identity(&self) -> u64;
}

pub struct ListQuery<R: Record> {
    predicates: Vec<Predicate<R::Field>>,
    search: Option<SearchTerms>,
    ordering: Vec<OrderKey<R::Field>>,
    fingerprint: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> ListQuery<R> {
    /// No constraints, default ordering
    pub fn unfiltered() -> Self {
        Self {
            predicates: Vec::new(),
            search: None,
            ordering: R::schema().default_ordering.to_vec(),
            fingerprint: String::new(),
            _record: PhantomData,
        }
    }

    /// Compose a query from request parameters.
    ///
    /// Unrecognized parameters are ignored. Recognized ones are parsed
    /// eagerly; the first malformed value is returned as an error.
    pub fn build(params: &QueryParams) -> Result<Self, QueryError> {
        let schema = R::schema();
        let mut query = Self::unfiltered();

        for spec in schema.filters {
            let Some(raw) = params.get(spec.param) else {
                continue;
            };
            if raw.is_empty() && spec.parser.skips_empty() {
                continue;
            }
            let operand = spec.parser.parse(spec.param, raw)?;
            query
                .predicates
                .push(Predicate::new(spec.field, spec.op, operand));
        }

        if let Some(raw) = params.get(SEARCH_PARAM) {
            query.search = SearchTerms::parse(raw);
        }

        if let Some(raw) = params.get(ORDERING_PARAM) {
            if let Some(keys) = parse_ordering(raw, schema.ordering_fields)? {
                query.ordering = keys;
            }
        }

        query.refresh_fingerprint();
        Ok(query)
    }

    /// Builder: add one more constraint (AND)
    pub fn and_where(mut self, predicate: Predicate<R::Field>) -> Self {
        self.predicates.push(predicate);
        self.refresh_fingerprint();
        self
    }

    /// Builder: replace the ordering
    pub fn order_by(mut self, keys: impl IntoIterator<Item = OrderKey<R::Field>>) -> Self {
        self.ordering = keys.into_iter().collect();
        self
    }

    // ========== Inspection ==========

    pub fn predicates(&self) -> &[Predicate<R::Field>] {
        &self.predicates
    }

    /// Canonical form of the constraints (not the ordering).
    ///
    /// Built from the parsed predicates and search terms, never from raw
    /// parameter text, so two queries share a fingerprint only when their
    /// parsed constraints are equal.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn refresh_fingerprint(&mut self) {
        self.fingerprint = match (self.predicates.is_empty(), &self.search) {
            (true, None) => String::new(),
            (_, search) => format!("{:?};{:?}", self.predicates, search),
        };
    }

    // ========== Evaluation ==========

    pub fn matches(&self, record: &R) -> bool {
        let filtered = self
            .predicates
            .iter()
            .all(|p| p.accepts(record.field(p.field)));
        if !filtered {
            return false;
        }

        match &self.search {
            Some(search) => search.matches(
                R::schema()
                    .search_fields
                    .iter()
                    .filter_map(|f| record.field(*f).as_text()),
            ),
            None => true,
        }
    }

    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        self.ordering
            .iter()
            .map(|key| {
                let ord = a
                    .field(key.field)
                    .partial_cmp(&b.field(key.field))
                    .unwrap_or(Ordering::Equal);
                directed(ord, key.descending)
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or_else(|| a.identity().cmp(&b.identity()))
    }

    /// Filter and sort `rows`
    pub fn evaluate(&self, rows: impl IntoIterator<Item = R>) -> Vec<R> {
        let mut selected: Vec<R> = rows.into_iter().filter(|r| self.matches(r)).collect();
        selected.sort_by(|a, b| self.compare(a, b));
        selected
    }
}

impl<R: Record> Clone for ListQuery<R> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            search: self.search.clone(),
            ordering: self.ordering.clone(),
            fingerprint: self.fingerprint.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> core::fmt::Debug for ListQuery<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListQuery")
            .field("predicates", &self.predicates)
            .field("search", &self.search)
            .field("ordering", &self.ordering)
            .finish()
    }
}

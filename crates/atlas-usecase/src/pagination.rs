//! Pagination - Fixed-size, page-number based
//!
//! ```text
//! ?page=3  ──▶  { count, next: "...?page=4", previous: "...?page=2", results }
//! ```
//!
//! A page that does not exist is an error, never clamped. The one
//! exception is page 1 of an empty listing, which is an empty page.

use atlas_domain::QueryParams;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::UseCaseError;

pub const PAGE_SIZE: usize = 10;
pub const PAGE_PARAM: &str = "page";
/// Alias accepted in place of the last page number
const LAST_PAGE: &str = "last";

/// Response envelope of every paginated listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Builder: convert the results, keeping count and links
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

/// Where a listing was requested from: links are built from it
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    path: &'a str,
    params: &'a QueryParams,
}

impl<'a> PageRequest<'a> {
    pub fn new(path: &'a str, params: &'a QueryParams) -> Self {
        Self { path, params }
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn params(&self) -> &'a QueryParams {
        self.params
    }

    /// Resolve the requested page number against `page_count` pages
    fn page_number(&self, page_count: usize) -> Result<usize, UseCaseError> {
        let number = match self.params.get(PAGE_PARAM) {
            None => 1,
            Some(LAST_PAGE) => page_count,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| UseCaseError::InvalidPage)?,
        };

        if number == 0 || number > page_count {
            return Err(UseCaseError::InvalidPage);
        }
        Ok(number)
    }

    /// Relative link to `page`; page 1 drops the parameter
    fn link(&self, page: usize) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        for (key, value) in self.params.iter().filter(|(k, _)| *k != PAGE_PARAM) {
            query.append_pair(key, value);
            any = true;
        }
        if page > 1 {
            query.append_pair(PAGE_PARAM, &page.to_string());
            any = true;
        }

        if any {
            format!("{}?{}", self.path, query.finish())
        } else {
            self.path.to_string()
        }
    }
}

/// Cut the page the request asks for out of `items`
pub fn paginate<T>(items: Vec<T>, request: PageRequest<'_>) -> Result<Page<T>, UseCaseError> {
    let count = items.len();
    let page_count = count.div_ceil(PAGE_SIZE).max(1);
    let number = request.page_number(page_count)?;

    let results: Vec<T> = items
        .into_iter()
        .skip((number - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    Ok(Page {
        count,
        next: (number < page_count).then(|| request.link(number + 1)),
        previous: (number > 1).then(|| request.link(number - 1)),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(count: usize, params: &QueryParams) -> Result<Page<usize>, UseCaseError> {
        paginate((0..count).collect(), PageRequest::new("/heroes/", params))
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let page = page_of(25, &QueryParams::new()).unwrap();
        assert_eq!(page.count, 25);
        assert_eq!(page.results, (0..10).collect::<Vec<_>>());
        assert_eq!(page.next.as_deref(), Some("/heroes/?page=2"));
        assert_eq!(page.previous, None);
    }

    #[test]
    fn test_link_to_first_page_drops_page_param() {
        let params = QueryParams::new().with("page", "2").with("job_class", "mage");
        let page = page_of(25, &params).unwrap();
        assert_eq!(page.results, (10..20).collect::<Vec<_>>());
        assert_eq!(page.previous.as_deref(), Some("/heroes/?job_class=mage"));
        assert_eq!(page.next.as_deref(), Some("/heroes/?job_class=mage&page=3"));
    }

    #[test]
    fn test_last_page() {
        let params = QueryParams::new().with("page", "last");
        let page = page_of(25, &params).unwrap();
        assert_eq!(page.results, vec![20, 21, 22, 23, 24]);
        assert_eq!(page.next, None);
        assert_eq!(page.previous.as_deref(), Some("/heroes/?page=2"));
    }

    #[test]
    fn test_links_are_encoded() {
        let params = QueryParams::new().with("search", "iron fist").with("page", "1");
        let page = page_of(11, &params).unwrap();
        assert_eq!(page.next.as_deref(), Some("/heroes/?search=iron+fist&page=2"));
    }

    #[test]
    fn test_empty_listing_has_one_empty_page() {
        let page = page_of(0, &QueryParams::new()).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn test_invalid_pages_are_rejected() {
        for raw in ["0", "4", "abc", "", "-1", "1.5"] {
            let params = QueryParams::new().with("page", raw);
            assert!(
                matches!(page_of(25, &params), Err(UseCaseError::InvalidPage)),
                "page={raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_walking_all_pages_yields_everything_once() {
        let mut seen = Vec::new();
        let mut params = QueryParams::new();
        loop {
            let page = page_of(37, &params).unwrap();
            seen.extend(page.results);
            match page.next {
                Some(link) => {
                    let number = link.rsplit("page=").next().unwrap().to_string();
                    params = QueryParams::new().with("page", number);
                }
                None => break,
            }
        }
        assert_eq!(seen, (0..37).collect::<Vec<_>>());
    }

    #[test]
    fn test_envelope_serializes() {
        let page = page_of(1, &QueryParams::new()).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "count": 1, "next": null, "previous": null, "results": [0] })
        );
    }
}

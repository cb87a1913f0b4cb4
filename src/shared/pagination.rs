use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Standard `?page=N` query parameter for paginated question endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Return the fixed-size window of `items` addressed by 1-based `page`.
///
/// A page past the end of the data yields an empty slice; callers treat that
/// as a not-found condition. Non-positive page numbers clamp to page 1.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());

    if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_takes_first_ten() {
        let data = items(25);
        assert_eq!(paginate(&data, 1), &data[..10]);
    }

    #[test]
    fn last_page_may_be_partial() {
        let data = items(25);
        assert_eq!(paginate(&data, 3), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_past_the_data_is_empty() {
        let data = items(25);
        assert!(paginate(&data, 4).is_empty());
        assert!(paginate(&data, 100).is_empty());
    }

    #[test]
    fn exact_boundary_page_is_full_then_empty() {
        let data = items(20);
        assert_eq!(paginate(&data, 2).len(), 10);
        assert!(paginate(&data, 3).is_empty());
    }

    #[test]
    fn non_positive_pages_clamp_to_first() {
        let data = items(15);
        assert_eq!(paginate(&data, 0), paginate(&data, 1));
        assert_eq!(paginate(&data, -7), paginate(&data, 1));
    }

    #[test]
    fn empty_input_yields_empty_page() {
        let data: Vec<usize> = vec![];
        assert!(paginate(&data, 1).is_empty());
    }

    #[test]
    fn page_query_defaults_to_one() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);

        let q: PageQuery = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(q.page, 3);
    }
}

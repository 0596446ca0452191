use serde::Deserialize;
use utoipa::IntoParams;

use crate::utils::deserializers::deserialize_lenient_i64;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number. Anything that is not an integer means page 1.
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Returns the `page`-th window of `QUESTIONS_PER_PAGE` items. Pages start at 1;
/// a page past the end, or below 1, is empty.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    let Some(index) = page
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
    else {
        return Vec::new();
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(len: usize, page: i64) -> usize {
        let skipped = (page as usize - 1) * QUESTIONS_PER_PAGE;
        QUESTIONS_PER_PAGE.min(len.saturating_sub(skipped))
    }

    #[test]
    fn page_sizes_follow_the_window_formula() {
        for len in [0usize, 1, 9, 10, 11, 25, 30] {
            let items: Vec<usize> = (0..len).collect();
            for page in 1..=5 {
                assert_eq!(
                    paginate(&items, page).len(),
                    expected_len(len, page),
                    "len={len} page={page}"
                );
            }
        }
    }

    #[test]
    fn pages_keep_input_order() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3), vec![21, 22, 23]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 2).is_empty());
        assert!(paginate(&items, 1000).is_empty());
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -3).is_empty());
        assert!(paginate(&items, i64::MAX).is_empty());
        assert!(paginate(&items, i64::MIN).is_empty());
    }

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(PageQuery::default().page(), 1);
        assert_eq!(PageQuery { page: Some(4) }.page(), 4);
    }
}

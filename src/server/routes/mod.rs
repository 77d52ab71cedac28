mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::Deserialize;
use serde_json::Value;

use crate::db::{Category, Question};

pub(crate) const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` as sent by the frontend, 1-indexed, defaulting to 1.
/// A value that fails to parse also falls back to 1.
#[derive(Deserialize, Default)]
pub(crate) struct PageQuery {
    page: Option<u32>,
}

impl PageQuery {
    pub(crate) fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

pub(crate) fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> u32 {
    query.map(|Query(params)| params).unwrap_or_default().page()
}

/// Slice `[(page-1)*10, page*10)` out of the full result set. Pages past
/// the end come back empty, and so does page 0.
pub(crate) fn paginate(questions: &[Question], page: u32) -> &[Question] {
    let Some(preceding_pages) = (page as usize).checked_sub(1) else {
        return &[];
    };
    let start = preceding_pages * QUESTIONS_PER_PAGE;
    if start >= questions.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
    &questions[start..end]
}

/// Categories as the `{"<id>": "<type>"}` object the frontend consumes.
pub(crate) fn category_map(categories: &[Category]) -> serde_json::Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.kind.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: i64) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                id,
                question: format!("question {id}"),
                answer: format!("answer {id}"),
                difficulty: 1,
                category: 1,
            })
            .collect()
    }

    #[test]
    fn full_first_page() {
        let all = questions(12);
        let page = paginate(&all, 1);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, 1);
        assert_eq!(page[9].id, 10);
    }

    #[test]
    fn partial_last_page() {
        let all = questions(12);
        let page = paginate(&all, 2);
        let ids: Vec<i64> = page.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let all = questions(12);
        assert!(paginate(&all, 3).is_empty());
        assert!(paginate(&all, 900).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let all = questions(12);
        assert!(paginate(&all, 0).is_empty());
    }

    #[test]
    fn empty_set_has_no_pages() {
        assert!(paginate(&[], 1).is_empty());
    }
}

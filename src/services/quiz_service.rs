use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::database::DynStore;
use crate::dto::quiz_dto::ALL_CATEGORIES;
use crate::error::Result;
use crate::models::question::Question;

#[derive(Clone)]
pub struct QuizService {
    store: DynStore,
}

impl QuizService {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Next quiz question for `category` (0 means every category) that is not
    /// in `previous`. `None` once every candidate has been served, or when the
    /// category has no questions at all.
    pub async fn next_question(&self, category: i32, previous: &[i32]) -> Result<Option<Question>> {
        let candidates = if category == ALL_CATEGORIES {
            self.store.all_questions().await?
        } else {
            self.store.questions_by_category(category).await?
        };
        let picked = pick_unseen(&candidates, previous, &mut rand::thread_rng()).cloned();
        tracing::debug!(
            category,
            candidates = candidates.len(),
            served = previous.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "quiz question drawn"
        );
        Ok(picked)
    }
}

/// Uniform choice among the candidates whose id is not in `previous`.
pub fn pick_unseen<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    previous: &[i32],
    rng: &mut R,
) -> Option<&'a Question> {
    let served: HashSet<i32> = previous.iter().copied().collect();
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !served.contains(&q.id))
        .collect();
    unseen.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn questions(ids: &[i32]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("question {id}"),
                answer: format!("answer {id}"),
                category: 1,
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn never_returns_a_served_question() {
        let candidates = questions(&[1, 2, 3, 4, 5]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = pick_unseen(&candidates, &[1, 2, 4, 5], &mut rng).unwrap();
            assert_eq!(picked.id, 3);
        }
    }

    #[test]
    fn exhausted_candidates_yield_nothing() {
        let candidates = questions(&[10, 11]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_unseen(&candidates, &[11, 10], &mut rng).is_none());
        // ids outside the candidate set do not count toward exhaustion
        assert!(pick_unseen(&candidates, &[10, 99], &mut rng).is_some());
    }

    #[test]
    fn empty_candidate_set_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pick_unseen(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn every_unseen_question_can_be_drawn() {
        let candidates = questions(&[1, 2, 3, 4]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_unseen(&candidates, &[2], &mut rng).unwrap().id);
        }
        assert_eq!(seen, HashSet::from([1, 3, 4]));
    }
}

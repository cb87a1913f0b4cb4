use rand::seq::SliceRandom;
use rand::Rng;

use crate::features::questions::dtos::QuestionDto;

/// Pick one question uniformly at random from `pool`, excluding any id in
/// `previous`. Returns `None` when every candidate has already been served.
///
/// Stateless single-shot selection: the caller resubmits the growing
/// previously-served set on every request.
pub fn choose_unseen<'a, R: Rng + ?Sized>(
    pool: &'a [QuestionDto],
    previous: &[i32],
    rng: &mut R,
) -> Option<&'a QuestionDto> {
    let candidates: Vec<&QuestionDto> = pool
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(ids: &[i32]) -> Vec<QuestionDto> {
        ids.iter()
            .map(|&id| QuestionDto {
                id,
                question: format!("question {}", id),
                answer: "answer".to_string(),
                category: "1".to_string(),
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn never_returns_a_previously_served_question() {
        let pool = pool(&[1, 2, 3, 4, 5]);
        let previous = vec![1, 3, 5];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let picked = choose_unseen(&pool, &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let pool = pool(&[1, 2]);
        let mut rng = StdRng::seed_from_u64(7);

        assert!(choose_unseen(&pool, &[1, 2], &mut rng).is_none());
        assert!(choose_unseen(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn single_remaining_candidate_is_always_picked() {
        let pool = pool(&[1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(42);

        let picked = choose_unseen(&pool, &[1, 2], &mut rng).unwrap();
        assert_eq!(picked.id, 3);
    }

    #[test]
    fn selection_covers_the_whole_pool() {
        let pool = pool(&[1, 2, 3, 4]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::BTreeSet::new();

        for _ in 0..200 {
            seen.insert(choose_unseen(&pool, &[], &mut rng).unwrap().id);
        }

        assert_eq!(seen.len(), pool.len());
    }
}

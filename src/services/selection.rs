use rand::Rng;

use crate::catalog::models::Question;
use crate::catalog::types::{Category, Difficulty};
use crate::repositories::questions::QuestionBank;

pub(crate) const DEFAULT_COUNT: i64 = 10;

/// Criteria for one practice batch. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectionFilters {
    pub(crate) category: Option<Category>,
    pub(crate) topic: Option<String>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) count: Option<i64>,
}

impl SelectionFilters {
    pub(crate) fn matches(&self, question: &Question) -> bool {
        self.category.map_or(true, |category| question.category == category)
            && self.topic.as_deref().map_or(true, |topic| question.topic == topic)
            && self.difficulty.map_or(true, |difficulty| question.difficulty == difficulty)
    }

    /// Zero or negative counts select nothing.
    pub(crate) fn requested_count(&self) -> usize {
        usize::try_from(self.count.unwrap_or(DEFAULT_COUNT)).unwrap_or(0)
    }
}

/// Fisher-Yates: every permutation is equally likely given a uniform `rng`.
pub(crate) fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Filters the catalog, shuffles the matches and keeps at most the requested count.
/// An empty result is a normal outcome.
pub(crate) fn select<'a, R: Rng>(
    bank: &'a QuestionBank,
    filters: &SelectionFilters,
    rng: &mut R,
) -> Vec<&'a Question> {
    let count = filters.requested_count();
    if count == 0 {
        return Vec::new();
    }

    let mut pool = bank.all().iter().filter(|q| filters.matches(q)).collect::<Vec<_>>();
    shuffle(&mut pool, rng);
    pool.truncate(count);
    pool
}

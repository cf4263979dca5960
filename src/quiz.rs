use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::models::Question;
use crate::names::ALL_CATEGORIES_ID;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Category(i64),
}

impl CategoryScope {
    pub fn from_id(category_id: i64) -> Self {
        if category_id == ALL_CATEGORIES_ID {
            CategoryScope::All
        } else {
            CategoryScope::Category(category_id)
        }
    }
}

/// The scope resolved to no questions at all, so the category is unknown or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPool;

/// Draw one question uniformly from `pool`, skipping ids in `previous`.
/// `Ok(None)` means every question in the pool has already been asked.
pub fn select<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Result<Option<&'a Question>, EmptyPool> {
    if pool.is_empty() {
        return Err(EmptyPool);
    }

    let asked: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<&Question> = pool.iter().filter(|q| !asked.contains(&q.id)).collect();

    Ok(remaining.choose(rng).copied())
}

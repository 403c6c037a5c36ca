//! Per-hero favorite flags held for the current session only.

use crate::domain::HeroId;
use std::collections::HashSet;

/// Set of hero ids the user has marked as favorite.
///
/// Membership is tracked per id, so toggling one hero never affects another.
/// Created empty and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<HeroId>,
}

impl FavoriteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id` and returns the new status.
    pub fn toggle(&mut self, id: HeroId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_favorite(&self, id: HeroId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite ids in ascending order.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<HeroId> {
        let mut ids: Vec<HeroId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

//! Which hero, if any, the detail panel shows.

use crate::domain::{Hero, HeroId};

/// Detail-view selection, stored by id and resolved against the filtered collection.
///
/// The id survives query changes, including a return to idle.
/// [`SelectionState::current`] only yields a hero while that hero is part of the
/// collection it is resolved against. A hero that drops out of the filtered
/// collection is hidden, not deselected: if a later query matches it again it
/// shows up as selected once more. Use [`SelectionState::clear`] to drop the id
/// for good.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<HeroId>,
}

impl SelectionState {
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Selects `id` if it is present in `filtered`.
    ///
    /// An unknown id leaves the selection unchanged and returns `false`.
    pub fn select(&mut self, id: HeroId, filtered: &[Hero]) -> bool {
        if filtered.iter().any(|hero| hero.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Raw selected id, regardless of whether it is currently visible.
    #[must_use]
    pub const fn selected_id(&self) -> Option<HeroId> {
        self.selected
    }

    /// Resolves the selection against `filtered`.
    #[must_use]
    pub fn current<'a>(&self, filtered: &'a [Hero]) -> Option<&'a Hero> {
        let id = self.selected?;
        filtered.iter().find(|hero| hero.id == id)
    }
}

// src/core/menu.rs

//! # Command Menu
//!
//! Owns the category/option catalog, the feature-flag set, and the numbering
//! table derived from both. The numbering table is never patched: every
//! mutator ends in [`CommandMenu::rebuild_numbering`], which recomputes it from
//! scratch. Numbers run from 1 to N without gaps, across category boundaries,
//! and only visible options get one.

use crate::constants::EXIT_CHOICE;
use crate::core::menu_catalog;
use crate::models::{Choice, MenuCategory, MenuOption, MenuState, MenuStatistics, NumberedEntry};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors returned by menu mutators. A failed call leaves the menu unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("Menu category '{name}' not found.")]
    UnknownCategory { name: String },
}

/// The command menu: catalog, current flags and the numbering derived from them.
#[derive(Debug, Clone)]
pub struct CommandMenu {
    categories: Vec<MenuCategory>,
    flags: BTreeMap<String, bool>,
    /// Entry `i` carries number `i + 1`.
    numbering: Vec<NumberedEntry>,
    state: MenuState,
}

impl Default for CommandMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandMenu {
    /// Creates a menu over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(menu_catalog::default_catalog())
    }

    /// Creates a menu over an arbitrary catalog. Flags start empty and the
    /// numbering table stays empty until the first mutator runs.
    pub fn with_catalog(categories: Vec<MenuCategory>) -> Self {
        log::debug!("CommandMenu created with {} categories", categories.len());
        Self {
            categories,
            flags: BTreeMap::new(),
            numbering: Vec::new(),
            state: MenuState::Uninitialized,
        }
    }

    // --- Mutators ---

    /// Merges `flags` into the current flag set and renumbers.
    /// Keys not mentioned keep their previous value.
    pub fn update_flags<I, K>(&mut self, flags: I)
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        self.flags
            .extend(flags.into_iter().map(|(name, value)| (name.into(), value)));
        self.rebuild_numbering();
        log::debug!("Feature flags updated: {:?}", self.flags);
    }

    /// Appends `option` to the category named exactly `category_name` and renumbers.
    ///
    /// # Errors
    /// [`MenuError::UnknownCategory`] if no category has that name; nothing changes.
    pub fn add_option(&mut self, category_name: &str, option: MenuOption) -> Result<(), MenuError> {
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.name == category_name)
        else {
            log::warn!("Menu category '{}' not found", category_name);
            return Err(MenuError::UnknownCategory {
                name: category_name.to_string(),
            });
        };

        log::info!(
            "Option '{}' added to menu category '{}'",
            option.name,
            category_name
        );
        category.options.push(option);
        self.rebuild_numbering();
        Ok(())
    }

    /// Discards the numbering table and recomputes it from catalog and flags.
    fn rebuild_numbering(&mut self) {
        self.numbering.clear();

        for (category_index, category) in self.categories.iter().enumerate() {
            // Categories without visible options simply contribute nothing;
            // the counter is the table length and keeps running.
            for (option_index, option) in category.visible_options(&self.flags) {
                self.numbering.push(NumberedEntry {
                    category_index,
                    option_index,
                    option_name: option.name.clone(),
                    handler: option.handler.clone(),
                });
            }
        }

        self.state = MenuState::Ready;
        log::debug!("Numbering table rebuilt: {} options", self.numbering.len());
    }

    // --- Queries ---

    /// Resolves raw user input.
    ///
    /// `"0"` is always [`Choice::Exit`]. Any other input must be the exact
    /// decimal rendering of a number in the table (`"1"`, `"2"`, …); `"01"`,
    /// `" 1"` or `""` are [`Choice::Invalid`]. Callers that accept looser input
    /// normalize it first.
    pub fn resolve_choice(&self, input: &str) -> Choice {
        if input == EXIT_CHOICE {
            return Choice::Exit;
        }
        match self.option_info(input) {
            Some(entry) => Choice::Handler(entry.handler.clone()),
            None => Choice::Invalid,
        }
    }

    /// The numbering entry for `input`, using the same exact-match rules as
    /// [`CommandMenu::resolve_choice`]. `"0"` has no entry.
    pub fn option_info(&self, input: &str) -> Option<&NumberedEntry> {
        let number: usize = input.parse().ok()?;
        if number.to_string() != input {
            return None;
        }
        self.entry(number)
    }

    /// The entry numbered `number` (1-based).
    pub fn entry(&self, number: usize) -> Option<&NumberedEntry> {
        number
            .checked_sub(1)
            .and_then(|index| self.numbering.get(index))
    }

    /// `(number, entry)` pairs in display order.
    pub fn numbered_entries(&self) -> impl Iterator<Item = (usize, &NumberedEntry)> {
        self.numbering
            .iter()
            .enumerate()
            .map(|(index, entry)| (index + 1, entry))
    }

    /// The highest assigned number, which is also the number of visible options.
    pub fn max_option_number(&self) -> usize {
        self.numbering.len()
    }

    /// The full catalog in display order, hidden options included.
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// The merged flag set.
    pub fn flags(&self) -> &BTreeMap<String, bool> {
        &self.flags
    }

    /// `Uninitialized` until the first mutator runs.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Catalog totals next to what the current numbering table offers.
    pub fn statistics(&self) -> MenuStatistics {
        // Counted from the table so both "available" figures agree, also before
        // the first rebuild. Entries are grouped by category.
        let mut available_categories = 0;
        let mut last_category = None;
        for entry in &self.numbering {
            if last_category != Some(entry.category_index) {
                last_category = Some(entry.category_index);
                available_categories += 1;
            }
        }

        MenuStatistics {
            total_categories: self.categories.len(),
            available_categories,
            total_options: self.categories.iter().map(|c| c.options.len()).sum(),
            available_options: self.numbering.len(),
            current_flags: self.flags.clone(),
        }
    }
}

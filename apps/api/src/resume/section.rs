//! Section keys and the user's section selection.
//!
//! `SectionKey` is a closed set with a fixed canonical display order.
//! `SelectionState` tracks which sections a user has chosen to include in
//! the generated resume; it defaults to all five selected and is never
//! persisted across sessions.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// The five fixed resume sections, declared in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Education,
    Experience,
    Projects,
    Publications,
    Skills,
}

impl SectionKey {
    /// Canonical display order. Selection order never affects output order.
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Education,
        SectionKey::Experience,
        SectionKey::Projects,
        SectionKey::Publications,
        SectionKey::Skills,
    ];

    /// The section heading shown in the rendered document.
    pub fn label(self) -> &'static str {
        match self {
            SectionKey::Education => "Education",
            SectionKey::Experience => "Professional Experience",
            SectionKey::Projects => "Projects",
            SectionKey::Publications => "Publications",
            SectionKey::Skills => "Skills & Technologies",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The set of sections currently chosen for inclusion.
///
/// Stored as a membership flag per canonical slot, so iteration always walks
/// the canonical order no matter which order the user toggled keys in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: [bool; 5],
}

impl Default for SelectionState {
    /// A fresh selection includes all five sections (full resume).
    fn default() -> Self {
        Self {
            selected: [true; 5],
        }
    }
}

impl SelectionState {
    pub fn empty() -> Self {
        Self {
            selected: [false; 5],
        }
    }

    /// Builds a selection from an explicit key list. Duplicates collapse.
    pub fn from_keys(keys: &[SectionKey]) -> Self {
        let mut state = Self::empty();
        for key in keys {
            state.selected[key.index()] = true;
        }
        state
    }

    /// Adds the key if absent, removes it if present. Toggling the same key
    /// twice returns the selection to its prior state.
    pub fn toggle(&mut self, key: SectionKey) {
        self.selected[key.index()] = !self.selected[key.index()];
    }

    pub fn contains(&self, key: SectionKey) -> bool {
        self.selected[key.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.selected.iter().all(|s| !s)
    }

    pub fn len(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    /// Iterates the selected keys in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = SectionKey> + '_ {
        SectionKey::ALL
            .into_iter()
            .filter(|key| self.selected[key.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_full() {
        let state = SelectionState::default();
        assert_eq!(state.len(), 5);
        for key in SectionKey::ALL {
            assert!(state.contains(key));
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for key in SectionKey::ALL {
            let mut state = SelectionState::default();
            let before = state.clone();
            state.toggle(key);
            assert_ne!(state, before);
            state.toggle(key);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_iteration_order_is_canonical_regardless_of_toggle_order() {
        // Reach {education, projects, skills} by toggling in reverse order.
        let mut state = SelectionState::empty();
        state.toggle(SectionKey::Skills);
        state.toggle(SectionKey::Projects);
        state.toggle(SectionKey::Education);

        let keys: Vec<SectionKey> = state.iter().collect();
        assert_eq!(
            keys,
            vec![
                SectionKey::Education,
                SectionKey::Projects,
                SectionKey::Skills
            ]
        );
    }

    #[test]
    fn test_from_keys_collapses_duplicates() {
        let state = SelectionState::from_keys(&[
            SectionKey::Skills,
            SectionKey::Skills,
            SectionKey::Education,
        ]);
        assert_eq!(state.len(), 2);
        assert!(state.contains(SectionKey::Skills));
        assert!(state.contains(SectionKey::Education));
    }

    #[test]
    fn test_empty_selection_reports_empty() {
        let state = SelectionState::empty();
        assert!(state.is_empty());
        assert_eq!(state.iter().count(), 0);
    }

    #[test]
    fn test_section_key_wire_names_match_frontend() {
        let json = serde_json::to_string(&SectionKey::Publications).unwrap();
        assert_eq!(json, "\"publications\"");
        let key: SectionKey = serde_json::from_str("\"education\"").unwrap();
        assert_eq!(key, SectionKey::Education);
    }
}

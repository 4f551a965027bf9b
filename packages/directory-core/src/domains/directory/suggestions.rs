//! Suggestion engine - bounded name matches plus dropdown visibility.

use std::sync::Arc;

use crate::domains::directory::commands::SuggestionCommand;
use crate::domains::directory::events::SuggestionEvent;
use crate::domains::providers::{ProviderRecord, RecordStore};
use crate::machine::Machine;

/// Maximum number of candidates offered
pub const MAX_SUGGESTIONS: usize = 3;

/// Visibility of the suggestion dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Hidden,
    Open,
}

/// First [`MAX_SUGGESTIONS`] records in store order whose name contains `term`.
///
/// Matching is case-insensitive on the trimmed term. An empty term has no candidates.
pub fn candidates(store: &RecordStore, term: &str) -> Vec<Arc<ProviderRecord>> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    store
        .iter()
        .filter(|record| record.name_contains_lowercase(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Dropdown state machine
/// Pure decision logic - NO IO, only state transitions
#[derive(Debug, Default)]
pub struct SuggestionMachine {
    state: DropdownState,
}

impl SuggestionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }
}

impl Machine for SuggestionMachine {
    type Event = SuggestionEvent;
    type Command = SuggestionCommand;

    fn decide(&mut self, event: &SuggestionEvent) -> Option<SuggestionCommand> {
        match event {
            SuggestionEvent::InputFocused | SuggestionEvent::TermEdited => {
                self.state = DropdownState::Open;
                None
            }

            SuggestionEvent::EscapePressed => {
                if self.state == DropdownState::Open {
                    self.state = DropdownState::Hidden;
                }
                None
            }

            SuggestionEvent::SuggestionChosen { name } => {
                self.state = DropdownState::Hidden;
                Some(SuggestionCommand::ApplySearchTerm { name: name.clone() })
            }

            SuggestionEvent::PointerOutside
            | SuggestionEvent::SearchSubmitted
            | SuggestionEvent::Dismissed => {
                self.state = DropdownState::Hidden;
                None
            }
        }
    }
}

/// Snapshot of the suggestion panel handed to the rendering layer
#[derive(Debug, Clone, Default)]
pub struct SuggestionState {
    pub dropdown: DropdownState,
    pub candidates: Vec<Arc<ProviderRecord>>,
}

impl SuggestionState {
    pub fn visible(&self) -> bool {
        self.dropdown == DropdownState::Open
    }

    /// Whether anything should actually be drawn
    pub fn shows_candidates(&self) -> bool {
        self.visible() && !self.candidates.is_empty()
    }
}

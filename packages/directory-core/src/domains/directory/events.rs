//! Directory events - FACT EVENTS ONLY
//!
//! Events are immutable facts about what happened. Machines observe them and
//! decide whether the engine should act (push an address, apply a term).

use serde::{Deserialize, Serialize};

/// Why the filter state changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOrigin {
    /// Initial address decoded when the session started
    Startup,
    /// A setter invoked by the user
    User,
    /// A back/forward navigation was consumed
    History,
}

/// The filter state changed; `query` is its encoded form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStateChanged {
    pub query: String,
    pub origin: ChangeOrigin,
}

/// Inputs that drive the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionEvent {
    /// Search input gained focus
    InputFocused,

    /// Search term was edited
    TermEdited,

    /// Pointer interaction outside the search control
    PointerOutside,

    /// Cancel/Escape received
    EscapePressed,

    /// A candidate was picked from the dropdown
    SuggestionChosen { name: String },

    /// Search form was submitted
    SearchSubmitted,

    /// Dropdown dismissed explicitly by the rendering layer
    Dismissed,
}

/// A history navigation (back/forward) happened in the address host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    Back,
    Forward,
}

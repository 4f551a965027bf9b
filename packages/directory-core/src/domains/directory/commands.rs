//! Directory commands - intent decided by machines, carried out by the engine

use serde::{Deserialize, Serialize};

/// Commands from the navigation machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCommand {
    /// Push a new history entry for the encoded state
    PushAddress { query: String },
}

/// Commands from the suggestion machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionCommand {
    /// Replace the search term with a chosen provider name
    ApplySearchTerm { name: String },
}

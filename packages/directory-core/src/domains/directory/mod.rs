//! Directory domain - search, filter and sort over the provider records,
//! with shareable addresses and name suggestions

pub mod commands;
pub mod engine;
pub mod events;
pub mod filter_state;
pub mod navigation;
pub mod pipeline;
pub mod query_codec;
pub mod suggestions;

// Re-export commonly used types
pub use commands::{NavigationCommand, SuggestionCommand};
pub use engine::{DirectoryEngine, LoadState};
pub use events::{ChangeOrigin, FilterStateChanged, NavigationEvent, SuggestionEvent};
pub use filter_state::{ConsultMode, FilterState, SortKey};
pub use navigation::NavigationMachine;
pub use pipeline::{derive, DerivedView};
pub use suggestions::{
    candidates, DropdownState, SuggestionMachine, SuggestionState, MAX_SUGGESTIONS,
};

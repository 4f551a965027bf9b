//! # Directory Core
//!
//! Query engine behind the provider directory: a searchable, filterable,
//! sortable list of providers whose view state lives in a shareable address.
//!
//! ## Architecture
//!
//! ```text
//! BaseProviderSource ──fetch once──► RecordStore
//!                                        │
//! setters / history ──► FilterState ─────┼──► pipeline::derive ──► DerivedView
//!                           │            └──► suggestions::candidates
//!                           ▼
//!                    NavigationMachine ──PushAddress──► AddressHost
//! ```
//!
//! - [`DirectoryEngine`] owns one session: the state, the records, and both
//!   machines. All mutation goes through its setters.
//! - [`query_codec`] maps [`FilterState`] to and from a query string.
//! - [`NavigationMachine`] suppresses the initial and history-driven changes so
//!   the address history never loops.
//! - [`SuggestionMachine`] drives dropdown visibility as an explicit two-state
//!   machine.
//!
//! ## Example
//!
//! ```
//! use directory_core::{ConsultMode, DirectoryEngine, InMemoryHistory, ProviderRecord};
//!
//! let history = InMemoryHistory::new("?sort=fees");
//! let mut engine = DirectoryEngine::new(history.clone());
//! engine.load(vec![
//!     ProviderRecord::named("Dr. A").with_fees("500").with_consult_modes(true, false),
//!     ProviderRecord::named("Dr. B").with_fees("300").with_consult_modes(false, true),
//! ]);
//! assert_eq!(engine.view().names(), vec!["Dr. B", "Dr. A"]);
//!
//! engine.set_consult_mode(ConsultMode::VideoOnly);
//! assert_eq!(engine.view().names(), vec!["Dr. A"]);
//! assert_eq!(history.entries(), vec!["sort=fees", "consult=video&sort=fees"]);
//! ```

pub mod common;
pub mod config;
pub mod domains;
pub mod error;
pub mod kernel;
mod machine;

pub use crate::common::LooseNumber;
pub use crate::config::Config;
pub use crate::domains::directory::{
    query_codec, ChangeOrigin, ConsultMode, DerivedView, DirectoryEngine, DropdownState,
    FilterState, FilterStateChanged, LoadState, NavigationCommand, NavigationEvent,
    NavigationMachine, SortKey, SuggestionCommand, SuggestionEvent, SuggestionMachine,
    SuggestionState, MAX_SUGGESTIONS,
};
pub use crate::domains::providers::{Clinic, ClinicAddress, ProviderRecord, RecordStore, Speciality};
pub use crate::error::{SessionError, SourceError};
pub use crate::kernel::{
    AddressHost, BaseProviderSource, FileProviderSource, HttpProviderSource, InMemoryHistory,
    MockProviderSource, NavigationSubscription, SubscriptionId,
};
pub use crate::machine::Machine;

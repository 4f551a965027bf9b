// Infrastructure for the engine: collaborator traits and their implementations

pub mod history;
pub mod sources;
pub mod test_dependencies;
pub mod traits;

pub use history::InMemoryHistory;
pub use sources::{FileProviderSource, HttpProviderSource};
pub use test_dependencies::MockProviderSource;
pub use traits::{AddressHost, BaseProviderSource, NavigationSubscription, SubscriptionId};

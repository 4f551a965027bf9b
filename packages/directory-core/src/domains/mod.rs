pub mod directory;
pub mod providers;

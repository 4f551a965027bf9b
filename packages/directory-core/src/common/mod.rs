pub mod loose_number;

pub use loose_number::LooseNumber;

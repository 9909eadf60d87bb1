pub mod consensus;
pub mod search;

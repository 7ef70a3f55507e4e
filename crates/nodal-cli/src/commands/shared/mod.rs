pub mod export;
pub mod search;

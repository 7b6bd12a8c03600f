pub mod search;
pub mod sort;

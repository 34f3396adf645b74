pub mod characteristics;
pub mod search_count;
pub mod wine;

pub mod data;
pub mod types;

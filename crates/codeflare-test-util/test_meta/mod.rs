pub mod context;
pub mod summary;

//! External collaborators

pub mod table_store;

pub use table_store::{tables, TableStore};

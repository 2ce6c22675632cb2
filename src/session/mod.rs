//! Session state: named text fields with snapshot/restore persistence.

pub mod document;
pub mod field;
pub mod store;

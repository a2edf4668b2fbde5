pub mod docs;
pub mod explain;
pub mod files;
pub mod health;
pub mod questions;
pub mod topics;

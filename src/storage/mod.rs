//! Storage layer for saved dashboard widgets
//!
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Widget CRUD operations

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::FormDatabase;

//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod subject;
pub mod user;

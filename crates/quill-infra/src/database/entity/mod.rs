//! SeaORM entities.

pub mod content;

//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Owns the transactional refresh used by the spreadsheet importer.

pub mod errors;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod pricing;

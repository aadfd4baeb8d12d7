//! Repository layer: one zero-sized struct per table with associated async
//! functions taking `&PgPool`.

mod customer_repo;

pub use customer_repo::CustomerRepo;

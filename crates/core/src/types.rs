/// Customer ids as seen by the API.
///
/// The `customers.id` column is a PostgreSQL `SERIAL` (int4); queries cast it
/// to int8 on the way out and compare it against int8 parameters, so any
/// 64-bit path id is a valid lookup key.
pub type DbId = i64;

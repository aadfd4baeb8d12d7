/// Message returned when an update or delete matched no row.
pub const NO_ROWS_AFFECTED_MESSAGE: &str = "No row effected";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Unauthorized(String),

    /// A write statement completed but touched zero rows.
    #[error("{}", NO_ROWS_AFFECTED_MESSAGE)]
    NoRowsAffected,
}

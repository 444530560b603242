use sea_orm::DbErr;
use thiserror::Error;

pub type SeedResult<T> = Result<T, SeedError>;

/// Every variant is fatal for the run; nothing here is retried.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("clearing table {table} failed: {source}")]
    Reset {
        table: &'static str,
        #[source]
        source: DbErr,
    },
    #[error("loading {table} ids failed: {source}")]
    Resolve {
        table: &'static str,
        #[source]
        source: DbErr,
    },
    #[error("table {table} has no rows; its stage must run before dependents")]
    MissingParents { table: &'static str },
    #[error("batch insert into {table} failed for rows {start}..{end}: {source}")]
    BatchInsert {
        table: &'static str,
        start: usize,
        end: usize,
        #[source]
        source: DbErr,
    },
}

//! Chunked multi-row inserts. Chunk sizes bound the placeholder count of any
//! single statement regardless of dataset size; a failed chunk fails the
//! whole stage and reports its row-index range.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};
use tracing::info;

use crate::error::{SeedError, SeedResult};

pub const CHUNK_CATEGORIES: usize = 50;
pub const CHUNK_USERS: usize = 100;
pub const CHUNK_TAGS: usize = 50;
pub const CHUNK_POSTS: usize = 100;
pub const CHUNK_COMMENTS: usize = 200;
pub const CHUNK_POST_TAGS: usize = 500;
pub const CHUNK_ACTIVITY_LOGS: usize = 500;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Rows actually written (conflict-skipped rows are not counted).
    pub rows: u64,
    /// Multi-row insert statements issued.
    pub statements: usize,
}

/// Submit `rows` as a sequence of multi-row inserts of at most `chunk_size`
/// rows each. Progress is logged every `log_every` submitted rows rather
/// than per chunk. `on_conflict` lets join-table stages discard duplicate
/// keys instead of failing the batch.
pub async fn insert_chunked<A>(
    db: &DatabaseConnection,
    table: &'static str,
    rows: Vec<A>,
    chunk_size: usize,
    log_every: usize,
    on_conflict: Option<OnConflict>,
) -> SeedResult<BatchOutcome>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let total = rows.len();
    let mut outcome = BatchOutcome::default();
    let mut pending = rows.into_iter();
    let mut submitted = 0usize;

    loop {
        let chunk: Vec<A> = pending.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let start = submitted;
        let end = start + chunk.len();

        let mut insert = <A::Entity as EntityTrait>::insert_many(chunk);
        if let Some(conflict) = &on_conflict {
            insert = insert.on_conflict(conflict.clone());
        }
        let affected = insert
            .exec_without_returning(db)
            .await
            .map_err(|source| SeedError::BatchInsert {
                table,
                start,
                end,
                source,
            })?;

        outcome.rows += affected;
        outcome.statements += 1;
        submitted = end;

        if submitted % log_every == 0 || submitted == total {
            info!("{table}: {submitted}/{total} rows submitted");
        }
    }

    Ok(outcome)
}

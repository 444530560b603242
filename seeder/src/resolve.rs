//! Reference resolution: load a bounded window of already-committed parent
//! ids so dependent stages can fill in foreign keys. Dependent rows only ever
//! reference this window, not the full parent population; that trades
//! referential diversity for bounded memory and query cost.

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::warn;
use uuid::Uuid;

use crate::error::{SeedError, SeedResult};

/// Fetch up to `limit` ids from `table` (all of them when `None`). A failed
/// query or an empty table is fatal; a row whose id fails to decode is
/// logged and skipped, shrinking the window instead of aborting.
pub async fn parent_ids(
    db: &DatabaseConnection,
    table: &'static str,
    limit: Option<u64>,
) -> SeedResult<Vec<Uuid>> {
    let sql = match limit {
        Some(n) => format!("SELECT id FROM {table} LIMIT {n}"),
        None => format!("SELECT id FROM {table}"),
    };
    let rows = db
        .query_all(Statement::from_string(db.get_database_backend(), sql))
        .await
        .map_err(|source| SeedError::Resolve { table, source })?;

    let mut ids = Vec::with_capacity(rows.len());
    for row in rows {
        match row.try_get::<Uuid>("", "id") {
            Ok(id) => ids.push(id),
            Err(err) => warn!("skipping {table} row with undecodable id: {err}"),
        }
    }

    if ids.is_empty() {
        return Err(SeedError::MissingParents { table });
    }
    Ok(ids)
}

//! Schema reset: full-table clears in dependency order, inbound-FK tables
//! strictly before the tables they reference. One statement per table, no
//! transaction; the first failure aborts with the offending table's name.

use entity::{activity_log, category, comment, post, post_tag, tag, user, user_profile};
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{debug, info};

use crate::error::{SeedError, SeedResult};

pub async fn reset(db: &DatabaseConnection) -> SeedResult<()> {
    info!("clearing existing data");
    clear::<post_tag::Entity>(db, "post_tags").await?;
    clear::<comment::Entity>(db, "comments").await?;
    clear::<activity_log::Entity>(db, "activity_logs").await?;
    clear::<post::Entity>(db, "posts").await?;
    clear::<tag::Entity>(db, "tags").await?;
    clear::<user_profile::Entity>(db, "user_profiles").await?;
    clear::<user::Entity>(db, "users").await?;
    clear::<category::Entity>(db, "categories").await?;
    Ok(())
}

async fn clear<E: EntityTrait>(db: &DatabaseConnection, table: &'static str) -> SeedResult<()> {
    let result = E::delete_many()
        .exec(db)
        .await
        .map_err(|source| SeedError::Reset { table, source })?;
    debug!("cleared {table} ({} rows)", result.rows_affected);
    Ok(())
}

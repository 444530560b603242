//! Massive profile: thousands of generated rows per table for load-shaped
//! development datasets.

use chrono::Utc;
use entity::post_tag;
use rand::Rng;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::OnConflict;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::SeedResult;
use crate::generate;
use crate::insert::{
    insert_chunked, CHUNK_ACTIVITY_LOGS, CHUNK_CATEGORIES, CHUNK_COMMENTS, CHUNK_POSTS,
    CHUNK_POST_TAGS, CHUNK_TAGS, CHUNK_USERS,
};
use crate::pipeline::SeedSummary;
use crate::{resolve, vocab};

pub const USER_COUNT: usize = 1000;
pub const POST_COUNT: usize = 5000;
pub const COMMENT_COUNT: usize = 15_000;
/// Attempted link volume; duplicates are suppressed, so the row count lands
/// at or below this.
pub const POST_TAG_COUNT: usize = 25_000;
pub const ACTIVITY_LOG_COUNT: usize = 10_000;

// Parent-id windows per dependent stage. Dependent rows reference only these
// bounded samples, keeping the resolver's memory and query cost flat as the
// dataset grows.
const POST_AUTHOR_WINDOW: u64 = 100;
const COMMENT_POST_WINDOW: u64 = 1000;
const COMMENT_AUTHOR_WINDOW: u64 = 200;
const POST_TAG_POST_WINDOW: u64 = 2000;
const ACTIVITY_USER_WINDOW: u64 = 100;

pub async fn run<R: Rng>(db: &DatabaseConnection, rng: &mut R) -> SeedResult<SeedSummary> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut summary = SeedSummary::default();

    info!("seeding categories");
    summary.categories = insert_chunked(
        db,
        "categories",
        generate::categories(vocab::CATEGORIES, now),
        CHUNK_CATEGORIES,
        50,
        None,
    )
    .await?
    .rows;

    info!("seeding {USER_COUNT} users");
    summary.users = insert_chunked(
        db,
        "users",
        generate::users(USER_COUNT, now, rng),
        CHUNK_USERS,
        500,
        None,
    )
    .await?
    .rows;

    info!("seeding tag vocabulary");
    summary.tags = insert_chunked(db, "tags", generate::tags(now), CHUNK_TAGS, 100, None)
        .await?
        .rows;

    info!("seeding {POST_COUNT} posts");
    let author_ids = resolve::parent_ids(db, "users", Some(POST_AUTHOR_WINDOW)).await?;
    let category_ids = resolve::parent_ids(db, "categories", None).await?;
    summary.posts = insert_chunked(
        db,
        "posts",
        generate::posts(POST_COUNT, &author_ids, &category_ids, now, rng),
        CHUNK_POSTS,
        1000,
        None,
    )
    .await?
    .rows;

    info!("seeding {COMMENT_COUNT} comments");
    let post_ids = resolve::parent_ids(db, "posts", Some(COMMENT_POST_WINDOW)).await?;
    let commenter_ids = resolve::parent_ids(db, "users", Some(COMMENT_AUTHOR_WINDOW)).await?;
    summary.comments = insert_chunked(
        db,
        "comments",
        generate::comments(COMMENT_COUNT, &post_ids, &commenter_ids, now, rng),
        CHUNK_COMMENTS,
        2000,
        None,
    )
    .await?
    .rows;

    info!("seeding up to {POST_TAG_COUNT} post-tag links");
    let linked_post_ids = resolve::parent_ids(db, "posts", Some(POST_TAG_POST_WINDOW)).await?;
    let tag_ids = resolve::parent_ids(db, "tags", None).await?;
    let conflict = OnConflict::columns([post_tag::Column::PostId, post_tag::Column::TagId])
        .do_nothing()
        .to_owned();
    summary.post_tags = insert_chunked(
        db,
        "post_tags",
        generate::post_tag_pairs(POST_TAG_COUNT, &linked_post_ids, &tag_ids, rng),
        CHUNK_POST_TAGS,
        5000,
        Some(conflict),
    )
    .await?
    .rows;

    info!("seeding {ACTIVITY_LOG_COUNT} activity logs");
    let actor_ids = resolve::parent_ids(db, "users", Some(ACTIVITY_USER_WINDOW)).await?;
    summary.activity_logs = insert_chunked(
        db,
        "activity_logs",
        generate::activity_logs(ACTIVITY_LOG_COUNT, &actor_ids, now, rng),
        CHUNK_ACTIVITY_LOGS,
        2000,
        None,
    )
    .await?
    .rows;

    Ok(summary)
}

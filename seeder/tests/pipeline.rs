//! End-to-end pipeline tests against an in-memory sqlite database. The
//! pipeline only ever talks to a `DatabaseConnection`, so the same stages
//! that run against Postgres in production run here unmodified.

use std::collections::HashSet;

use chrono::Utc;
use entity::{activity_log, category, comment, post, post_tag, tag, user};
use migration::{Migrator, MigratorTrait};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sea_orm::sea_query::OnConflict;
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use seeder::{generate, insert, resolve, reset, Profile, SeedError};
use uuid::Uuid;

async fn fresh_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

#[tokio::test]
async fn small_profile_seeds_expected_counts() {
    let db = fresh_db().await;
    let summary = seeder::run(&db, Profile::Small).await.unwrap();

    assert_eq!(summary.categories, 8);
    assert_eq!(summary.users, 5);
    assert_eq!(summary.tags, 10);
    assert_eq!(summary.posts, 4);
    assert_eq!(summary.comments, 2);
    assert_eq!(summary.post_tags, 2);
    assert_eq!(summary.activity_logs, 0);

    assert_eq!(category::Entity::find().count(&db).await.unwrap(), 8);
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 5);
    assert_eq!(tag::Entity::find().count(&db).await.unwrap(), 10);
    assert_eq!(post::Entity::find().count(&db).await.unwrap(), 4);
    assert_eq!(comment::Entity::find().count(&db).await.unwrap(), 2);
    assert_eq!(post_tag::Entity::find().count(&db).await.unwrap(), 2);
    assert_eq!(activity_log::Entity::find().count(&db).await.unwrap(), 0);

    // Every foreign key must resolve to a row inserted earlier in this run.
    let user_ids: HashSet<Uuid> = user::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.id)
        .collect();
    let category_ids: HashSet<Uuid> = category::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.id)
        .collect();
    for row in post::Entity::find().all(&db).await.unwrap() {
        assert!(user_ids.contains(&row.author_id));
        assert!(category_ids.contains(&row.category_id));
        assert_eq!(row.status, post::Status::Published);
        assert!(row.published_at.is_some());
    }
}

#[tokio::test]
async fn rerunning_replaces_rather_than_accumulates() {
    let db = fresh_db().await;
    seeder::run(&db, Profile::Small).await.unwrap();
    seeder::run(&db, Profile::Small).await.unwrap();
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 5);
    assert_eq!(post::Entity::find().count(&db).await.unwrap(), 4);
}

#[tokio::test]
async fn reset_clears_everything_and_is_idempotent() {
    let db = fresh_db().await;
    seeder::run(&db, Profile::Small).await.unwrap();

    reset::reset(&db).await.unwrap();
    // A second reset on the already-empty schema must also succeed.
    reset::reset(&db).await.unwrap();

    assert_eq!(category::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(tag::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(post::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(comment::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(post_tag::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(activity_log::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn resolver_fails_fast_when_parent_table_is_empty() {
    let db = fresh_db().await;
    let err = resolve::parent_ids(&db, "users", Some(100))
        .await
        .unwrap_err();
    assert!(matches!(err, SeedError::MissingParents { table: "users" }));
    assert!(err.to_string().contains("users"));
}

#[tokio::test]
async fn chunked_insert_issues_ceil_n_over_c_statements() {
    let db = fresh_db().await;
    let mut rng = StdRng::seed_from_u64(42);
    let rows = generate::users(250, Utc::now().into(), &mut rng);

    let outcome = insert::insert_chunked(&db, "users", rows, 100, 1000, None)
        .await
        .unwrap();

    assert_eq!(outcome.statements, 3); // 100 + 100 + 50
    assert_eq!(outcome.rows, 250);
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 250);
}

#[tokio::test]
async fn chunk_failures_report_the_row_range() {
    let db = fresh_db().await;
    let mut rng = StdRng::seed_from_u64(9);
    let rows = generate::users(10, Utc::now().into(), &mut rng);
    insert::insert_chunked(&db, "users", rows, 100, 100, None)
        .await
        .unwrap();

    // Same sequence indexes again: usernames collide with the committed rows.
    let mut rng = StdRng::seed_from_u64(9);
    let duplicates = generate::users(10, Utc::now().into(), &mut rng);
    let err = insert::insert_chunked(&db, "users", duplicates, 4, 100, None)
        .await
        .unwrap_err();
    match err {
        SeedError::BatchInsert { table, start, end, .. } => {
            assert_eq!(table, "users");
            assert_eq!((start, end), (0, 4));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn duplicate_post_tag_pairs_are_silently_skipped() {
    let db = fresh_db().await;
    seeder::run(&db, Profile::Small).await.unwrap();

    let existing = post_tag::Entity::find().all(&db).await.unwrap();
    assert!(!existing.is_empty());
    let replay: Vec<post_tag::ActiveModel> = existing
        .iter()
        .map(|row| post_tag::ActiveModel {
            post_id: Set(row.post_id),
            tag_id: Set(row.tag_id),
        })
        .collect();

    let conflict = OnConflict::columns([post_tag::Column::PostId, post_tag::Column::TagId])
        .do_nothing()
        .to_owned();
    let outcome = insert::insert_chunked(&db, "post_tags", replay, 500, 500, Some(conflict))
        .await
        .unwrap();

    assert_eq!(outcome.rows, 0);
    assert_eq!(
        post_tag::Entity::find().count(&db).await.unwrap(),
        existing.len() as u64
    );
}

#[tokio::test]
async fn massive_profile_seeds_expected_counts() {
    let db = fresh_db().await;
    let mut rng = StdRng::seed_from_u64(2024);
    let summary = seeder::pipeline::run_with_rng(&db, Profile::Massive, &mut rng)
        .await
        .unwrap();

    assert_eq!(summary.categories, 15);
    assert_eq!(summary.users, 1000);
    assert_eq!(summary.tags, generate::tags(Utc::now().into()).len() as u64);
    assert_eq!(summary.posts, 5000);
    assert_eq!(summary.comments, 15_000);
    assert!(summary.post_tags <= 25_000);
    assert!(summary.post_tags > 0);
    assert_eq!(summary.activity_logs, 10_000);

    assert_eq!(
        post_tag::Entity::find().count(&db).await.unwrap(),
        summary.post_tags
    );
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 1000);
    assert_eq!(post::Entity::find().count(&db).await.unwrap(), 5000);
}

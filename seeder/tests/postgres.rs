//! Postgres round-trip for the pipeline. Skipped unless `TEST_DATABASE_URL`
//! points at a reachable server; each test works in its own throwaway
//! database and drops it afterwards.

use entity::{category, post, post_tag, user};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, EntityTrait, PaginatorTrait,
    Statement,
};
use seeder::{reset, Profile};
use url::Url;
use uuid::Uuid;

struct PgTestDb {
    db: DatabaseConnection,
    admin_url: String,
    db_name: String,
}

impl PgTestDb {
    async fn create() -> Option<Self> {
        let base = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("skipping Postgres pipeline tests: TEST_DATABASE_URL not set");
                return None;
            }
        };
        let (admin_url, db_name, test_url) = build_urls(&base)?;
        let admin = Database::connect(&admin_url).await.ok()?;
        let _ = admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("DROP DATABASE IF EXISTS \"{}\" WITH (FORCE);", db_name),
            ))
            .await;
        admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("CREATE DATABASE \"{}\";", db_name),
            ))
            .await
            .ok()?;
        let db = Database::connect(&test_url).await.ok()?;
        Migrator::up(&db, None).await.ok()?;
        Some(Self {
            db,
            admin_url,
            db_name,
        })
    }

    async fn drop(self) {
        let Self {
            db,
            admin_url,
            db_name,
        } = self;
        drop(db);
        if let Ok(admin) = Database::connect(&admin_url).await {
            let _ = admin
                .execute(Statement::from_string(
                    DatabaseBackend::Postgres,
                    format!("DROP DATABASE IF EXISTS \"{}\" WITH (FORCE);", db_name),
                ))
                .await;
        }
    }
}

fn build_urls(base: &str) -> Option<(String, String, String)> {
    let url = Url::parse(base).ok()?;
    let base_name = {
        let path = url.path().trim_start_matches('/');
        if path.is_empty() { "blog_seed_test" } else { path }.to_string()
    };
    let db_name = format!("{}_{}", base_name, Uuid::new_v4().simple());
    let mut admin_url = url.clone();
    admin_url.set_path("/postgres");
    let mut test_url = url.clone();
    test_url.set_path(&format!("/{}", db_name));
    Some((admin_url.to_string(), db_name, test_url.to_string()))
}

#[tokio::test]
async fn small_profile_round_trips_on_postgres() {
    let Some(ctx) = PgTestDb::create().await else {
        return;
    };

    let summary = seeder::run(&ctx.db, Profile::Small).await.unwrap();
    assert_eq!(summary.categories, 8);
    assert_eq!(summary.users, 5);
    assert_eq!(summary.tags, 10);
    assert_eq!(summary.posts, 4);
    assert_eq!(summary.comments, 2);
    assert_eq!(summary.post_tags, 2);

    let authors: Vec<Uuid> = user::Entity::find()
        .all(&ctx.db)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.id)
        .collect();
    for row in post::Entity::find().all(&ctx.db).await.unwrap() {
        assert!(authors.contains(&row.author_id));
    }

    // Reset honors foreign keys on a fully constrained schema and tolerates
    // an already-empty one.
    reset::reset(&ctx.db).await.unwrap();
    reset::reset(&ctx.db).await.unwrap();
    assert_eq!(category::Entity::find().count(&ctx.db).await.unwrap(), 0);
    assert_eq!(post_tag::Entity::find().count(&ctx.db).await.unwrap(), 0);

    ctx.drop().await;
}

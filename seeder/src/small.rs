//! Small profile: a handful of fixed fixtures for local development. Counts:
//! 8 categories, 5 users, 10 tags, 4 posts, 2 comments, 2 post-tag links,
//! no activity logs.

use chrono::{Duration, Utc};
use entity::{comment, post, post_tag, tag, user};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, Set};
use tracing::info;
use uuid::Uuid;

use crate::error::SeedResult;
use crate::generate::{self, slugify};
use crate::insert::{
    insert_chunked, CHUNK_CATEGORIES, CHUNK_COMMENTS, CHUNK_POSTS, CHUNK_POST_TAGS, CHUNK_TAGS,
    CHUNK_USERS,
};
use crate::pipeline::SeedSummary;
use crate::{resolve, vocab};

const USERS: &[(&str, &str, &str, &str)] = &[
    ("admin", "admin@blog.test", "Admin", "User"),
    ("johndoe", "john.doe@example.com", "John", "Doe"),
    ("janesmith", "jane.smith@example.com", "Jane", "Smith"),
    ("bobwilson", "bob.wilson@example.com", "Bob", "Wilson"),
    ("alicebrown", "alice.brown@example.com", "Alice", "Brown"),
];

const TAGS: &[(&str, &str)] = &[
    ("Rust", "The Rust programming language"),
    ("APIs", "Application programming interfaces"),
    ("Docker", "Container platform"),
    ("PostgreSQL", "Relational database"),
    ("Web Development", "Building for the web"),
    ("Microservices", "Microservice architecture"),
    ("Cloud Computing", "Computing in the cloud"),
    ("DevOps", "Development and operations practice"),
    ("Machine Learning", "Statistical learning systems"),
    ("Data Science", "Working with data at scale"),
];

const POSTS: &[(&str, &str, &str)] = &[
    (
        "Getting Started with Rust for Backend Services",
        "Rust combines memory safety with performance that rivals C++. This article walks \
         through its core ideas, strengths, and where it fits on the backend.",
        "Rust is a modern language combining safety and performance.",
    ),
    (
        "Building RESTful APIs That Age Well",
        "Designing an API is easy; designing one that survives three years of feature \
         requests is not. A practical look at versioning, pagination, and error shapes.",
        "Learn to build APIs that survive real-world growth.",
    ),
    (
        "Docker for Developers: A Practical Guide",
        "Containers changed how we build, ship, and run applications. This guide covers \
         the fundamentals a working developer actually needs.",
        "How containers can improve your development workflow.",
    ),
    (
        "PostgreSQL vs MySQL: Choosing a Database",
        "Picking a database is one of the most durable decisions a project makes. This \
         article compares the two most popular open-source options.",
        "Compare the two leading open-source relational databases.",
    ),
];

const COMMENTS: &[&str] = &[
    "Excellent article! This stack really shines for small services.",
    "Very useful for beginners. Could you write a follow-up on testing?",
];

pub async fn run(db: &DatabaseConnection) -> SeedResult<SeedSummary> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut summary = SeedSummary::default();

    info!("seeding categories");
    let categories = generate::categories(&vocab::CATEGORIES[..8], now);
    summary.categories = insert_chunked(db, "categories", categories, CHUNK_CATEGORIES, 50, None)
        .await?
        .rows;

    info!("seeding users");
    let users: Vec<user::ActiveModel> = USERS
        .iter()
        .map(|(username, email, first, last)| user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(vocab::PASSWORD_HASH.to_string()),
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();
    summary.users = insert_chunked(db, "users", users, CHUNK_USERS, 100, None)
        .await?
        .rows;

    info!("seeding tags");
    let tags: Vec<tag::ActiveModel> = TAGS
        .iter()
        .map(|(name, description)| tag::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            slug: Set(slugify(name)),
            description: Set(description.to_string()),
            created_at: Set(now),
        })
        .collect();
    summary.tags = insert_chunked(db, "tags", tags, CHUNK_TAGS, 50, None)
        .await?
        .rows;

    info!("seeding posts");
    let author_ids = resolve::parent_ids(db, "users", None).await?;
    let category_ids = resolve::parent_ids(db, "categories", None).await?;
    let posts: Vec<post::ActiveModel> = POSTS
        .iter()
        .enumerate()
        .map(|(idx, (title, content, excerpt))| post::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            slug: Set(slugify(title)),
            content: Set(content.to_string()),
            excerpt: Set(excerpt.to_string()),
            status: Set(post::Status::Published),
            author_id: Set(author_ids[idx % author_ids.len()]),
            category_id: Set(category_ids[0]),
            published_at: Set(Some(now - Duration::days(idx as i64 + 1))),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();
    summary.posts = insert_chunked(db, "posts", posts, CHUNK_POSTS, 100, None)
        .await?
        .rows;

    info!("seeding comments");
    let post_ids = resolve::parent_ids(db, "posts", Some(1)).await?;
    let comments: Vec<comment::ActiveModel> = COMMENTS
        .iter()
        .enumerate()
        .map(|(idx, content)| comment::ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(post_ids[0]),
            author_id: Set(author_ids[(idx + 1) % author_ids.len()]),
            parent_comment_id: Set(None),
            content: Set(content.to_string()),
            is_approved: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();
    summary.comments = insert_chunked(db, "comments", comments, CHUNK_COMMENTS, 200, None)
        .await?
        .rows;

    info!("seeding post-tag links");
    let tag_ids = resolve::parent_ids(db, "tags", Some(2)).await?;
    let links: Vec<post_tag::ActiveModel> = tag_ids
        .iter()
        .map(|tag_id| post_tag::ActiveModel {
            post_id: Set(post_ids[0]),
            tag_id: Set(*tag_id),
        })
        .collect();
    let conflict = OnConflict::columns([post_tag::Column::PostId, post_tag::Column::TagId])
        .do_nothing()
        .to_owned();
    summary.post_tags =
        insert_chunked(db, "post_tags", links, CHUNK_POST_TAGS, 500, Some(conflict))
            .await?
            .rows;

    // No activity logs in the small profile.
    Ok(summary)
}

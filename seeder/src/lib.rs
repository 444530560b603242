//! Batched seed pipeline for the blog schema.
//!
//! A one-shot maintenance tool: it clears every table in dependency order,
//! then repopulates the schema stage by stage (categories, users, tags,
//! posts, comments, post-tag links, activity logs). Each stage generates
//! candidate rows in memory, resolves the parent ids it needs from what
//! earlier stages committed, and submits fixed-size multi-row inserts.
//! Any failure aborts the run; recovery is rerunning the tool.

pub mod config;
pub mod error;
pub mod generate;
pub mod insert;
pub mod massive;
pub mod pipeline;
pub mod reset;
pub mod resolve;
pub mod small;
pub mod vocab;

pub use error::{SeedError, SeedResult};
pub use pipeline::{run, Profile, SeedSummary};

//! sea-orm entities for the blog schema seeded by the pipeline.

pub mod activity_log;
pub mod category;
pub mod comment;
pub mod post;
pub mod post_tag;
pub mod tag;
pub mod user;
pub mod user_profile;

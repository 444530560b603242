//! Entity generators: pure functions from counts, parent-id windows, and an
//! rng to in-memory `ActiveModel` rows. Uniqueness is never left to chance —
//! usernames, emails, and post slugs embed the row's sequence index.

use std::collections::HashSet;

use chrono::Duration;
use entity::{activity_log, category, comment, post, post_tag, tag, user};
use rand::Rng;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::Set;
use serde_json::json;
use uuid::Uuid;

use crate::vocab;

/// Lowercase, hyphenate, and strip everything that is not ASCII alphanumeric.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

pub fn categories(
    entries: &[(&str, &str)],
    now: DateTimeWithTimeZone,
) -> Vec<category::ActiveModel> {
    entries
        .iter()
        .map(|(name, description)| category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            slug: Set(slugify(name)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect()
}

pub fn users(count: usize, now: DateTimeWithTimeZone, rng: &mut impl Rng) -> Vec<user::ActiveModel> {
    (0..count)
        .map(|idx| {
            let first = *pick(rng, vocab::FIRST_NAMES);
            let last = *pick(rng, vocab::LAST_NAMES);
            let domain = *pick(rng, vocab::EMAIL_DOMAINS);
            let username = format!("{}{}{}", first.to_lowercase(), last.to_lowercase(), idx);
            let email = format!(
                "{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                idx,
                domain
            );
            user::ActiveModel {
                id: Set(Uuid::new_v4()),
                username: Set(username),
                email: Set(email),
                password_hash: Set(vocab::PASSWORD_HASH.to_string()),
                first_name: Set(first.to_string()),
                last_name: Set(last.to_string()),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
            }
        })
        .collect()
}

/// The full tag vocabulary, deduplicated by slug so the unique index can
/// never trip on near-synonyms in the word lists.
pub fn tags(now: DateTimeWithTimeZone) -> Vec<tag::ActiveModel> {
    let mut seen = HashSet::new();
    vocab::TAGS
        .iter()
        .filter_map(|name| {
            let slug = slugify(name);
            if !seen.insert(slug.clone()) {
                return None;
            }
            Some(tag::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name.to_string()),
                slug: Set(slug),
                description: Set(format!("Articles and content related to {name}")),
                created_at: Set(now),
            })
        })
        .collect()
}

pub fn posts(
    count: usize,
    authors: &[Uuid],
    categories: &[Uuid],
    now: DateTimeWithTimeZone,
    rng: &mut impl Rng,
) -> Vec<post::ActiveModel> {
    (0..count)
        .map(|idx| {
            let title = vocab::POST_TITLES[idx % vocab::POST_TITLES.len()];
            // Titles repeat; the index suffix keeps slugs unique.
            let slug = format!("{}-{}", slugify(title), idx);
            let published_at = now - Duration::days(rng.gen_range(0..365));
            post::ActiveModel {
                id: Set(Uuid::new_v4()),
                title: Set(title.to_string()),
                slug: Set(slug),
                content: Set(format!(
                    "Article {} on {}. Sample body text, long enough to read like a real post \
                     while staying synthetic.",
                    idx + 1,
                    title
                )),
                excerpt: Set(format!("A short summary of {title}")),
                status: Set(post::Status::Published),
                author_id: Set(authors[rng.gen_range(0..authors.len())]),
                category_id: Set(categories[rng.gen_range(0..categories.len())]),
                published_at: Set(Some(published_at)),
                created_at: Set(now),
                updated_at: Set(now),
            }
        })
        .collect()
}

pub fn comments(
    count: usize,
    posts: &[Uuid],
    authors: &[Uuid],
    now: DateTimeWithTimeZone,
    rng: &mut impl Rng,
) -> Vec<comment::ActiveModel> {
    (0..count)
        .map(|_| comment::ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(posts[rng.gen_range(0..posts.len())]),
            author_id: Set(authors[rng.gen_range(0..authors.len())]),
            parent_comment_id: Set(None),
            content: Set(pick(rng, vocab::COMMENT_TEMPLATES).to_string()),
            is_approved: Set(rng.gen_bool(0.9)),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect()
}

/// Pairs are drawn independently, so duplicates are expected at scale; the
/// inserter discards them via its conflict policy.
pub fn post_tag_pairs(
    count: usize,
    posts: &[Uuid],
    tags: &[Uuid],
    rng: &mut impl Rng,
) -> Vec<post_tag::ActiveModel> {
    (0..count)
        .map(|_| post_tag::ActiveModel {
            post_id: Set(posts[rng.gen_range(0..posts.len())]),
            tag_id: Set(tags[rng.gen_range(0..tags.len())]),
        })
        .collect()
}

pub fn activity_logs(
    count: usize,
    users: &[Uuid],
    now: DateTimeWithTimeZone,
    rng: &mut impl Rng,
) -> Vec<activity_log::ActiveModel> {
    (0..count)
        .map(|_| {
            let ip_address = format!("192.168.1.{}", rng.gen_range(0..255));
            let user_agent = *pick(rng, vocab::USER_AGENTS);
            let details = json!({
                "ip": ip_address,
                "user_agent": user_agent,
                "timestamp": now.to_rfc3339(),
            });
            activity_log::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(Some(users[rng.gen_range(0..users.len())])),
                action: Set(pick(rng, vocab::ACTIONS).to_string()),
                resource_type: Set(pick(rng, vocab::RESOURCE_TYPES).to_string()),
                resource_id: Set(None),
                details: Set(details),
                ip_address: Set(ip_address),
                user_agent: Set(user_agent.to_string()),
                created_at: Set(now),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sea_orm::ActiveValue;

    fn now() -> DateTimeWithTimeZone {
        Utc::now().into()
    }

    fn unwrap<T: Clone + Into<sea_orm::Value>>(value: &ActiveValue<T>) -> T {
        match value {
            ActiveValue::Set(inner) => inner.clone(),
            _ => panic!("expected set value"),
        }
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Getting Started with Rust"), "getting-started-with-rust");
        assert_eq!(slugify("GraphQL and REST: A Pragmatic Comparison"),
            "graphql-and-rest-a-pragmatic-comparison");
        assert_eq!(slugify("Node.js"), "node-js");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn usernames_and_emails_never_collide() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = users(1000, now(), &mut rng);
        let usernames: std::collections::HashSet<_> =
            rows.iter().map(|row| unwrap(&row.username)).collect();
        let emails: std::collections::HashSet<_> =
            rows.iter().map(|row| unwrap(&row.email)).collect();
        assert_eq!(usernames.len(), 1000);
        assert_eq!(emails.len(), 1000);
        assert!(unwrap(&rows[17].username).ends_with("17"));
    }

    #[test]
    fn tag_vocabulary_dedupes_by_slug() {
        let rows = tags(now());
        let slugs: std::collections::HashSet<_> =
            rows.iter().map(|row| unwrap(&row.slug)).collect();
        assert_eq!(slugs.len(), rows.len());
        assert!(rows.len() >= 150);
    }

    #[test]
    fn post_slugs_are_unique_despite_repeated_titles() {
        let mut rng = StdRng::seed_from_u64(7);
        let authors = vec![Uuid::new_v4()];
        let categories = vec![Uuid::new_v4()];
        let rows = posts(100, &authors, &categories, now(), &mut rng);
        let slugs: std::collections::HashSet<_> =
            rows.iter().map(|row| unwrap(&row.slug)).collect();
        assert_eq!(slugs.len(), 100);
        for row in &rows {
            let slug = unwrap(&row.slug);
            assert_eq!(slug, slug.to_lowercase());
            assert!(!slug.contains(' '));
        }
    }

    #[test]
    fn posts_are_backdated_within_a_year() {
        let mut rng = StdRng::seed_from_u64(3);
        let stamp = now();
        let rows = posts(200, &[Uuid::new_v4()], &[Uuid::new_v4()], stamp, &mut rng);
        for row in rows {
            let published = unwrap(&row.published_at).expect("published post has timestamp");
            assert!(published <= stamp);
            assert!(published >= stamp - Duration::days(365));
        }
    }

    #[test]
    fn comments_reference_supplied_parents() {
        let mut rng = StdRng::seed_from_u64(11);
        let posts: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let authors: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for row in comments(500, &posts, &authors, now(), &mut rng) {
            assert!(posts.contains(&unwrap(&row.post_id)));
            assert!(authors.contains(&unwrap(&row.author_id)));
            assert!(unwrap(&row.parent_comment_id).is_none());
        }
    }

    #[test]
    fn activity_logs_randomize_only_the_last_octet() {
        let mut rng = StdRng::seed_from_u64(5);
        let users = vec![Uuid::new_v4()];
        for row in activity_logs(100, &users, now(), &mut rng) {
            let ip = unwrap(&row.ip_address);
            assert!(ip.starts_with("192.168.1."));
            let details = unwrap(&row.details);
            assert_eq!(details["ip"], serde_json::Value::String(ip));
            assert!(details.get("timestamp").is_some());
        }
    }
}

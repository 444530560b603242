use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::SeedResult;
use crate::{massive, reset, small};

/// Preset row-count configuration selected at invocation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Profile {
    Small,
    Massive,
}

impl Profile {
    /// Unknown mode names fall back to the small profile.
    pub fn from_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("massive") {
            Profile::Massive
        } else {
            Profile::Small
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Small => "small",
            Profile::Massive => "massive",
        }
    }
}

/// Rows written per stage during one run. Join-table counts reflect
/// duplicate suppression, so they can be lower than the attempted volume.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: u64,
    pub users: u64,
    pub tags: u64,
    pub posts: u64,
    pub comments: u64,
    pub post_tags: u64,
    pub activity_logs: u64,
}

/// Reset the schema, then run every stage of the selected profile in
/// dependency order. Stages are strictly sequential on one connection; the
/// first error aborts the run. There is deliberately no wrapping
/// transaction: a partial run is recovered by rerunning, since reset is the
/// first stage of every run.
pub async fn run(db: &DatabaseConnection, profile: Profile) -> SeedResult<SeedSummary> {
    let mut rng = StdRng::from_entropy();
    run_with_rng(db, profile, &mut rng).await
}

/// Same as [`run`] but with a caller-supplied rng, for deterministic tests.
pub async fn run_with_rng<R: Rng>(
    db: &DatabaseConnection,
    profile: Profile,
    rng: &mut R,
) -> SeedResult<SeedSummary> {
    info!("running {} seed", profile.name());
    reset::reset(db).await?;
    match profile {
        Profile::Small => small::run(db).await,
        Profile::Massive => massive::run(db, rng).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_resolve_with_small_fallback() {
        assert_eq!(Profile::from_mode("massive"), Profile::Massive);
        assert_eq!(Profile::from_mode("MASSIVE"), Profile::Massive);
        assert_eq!(Profile::from_mode("small"), Profile::Small);
        assert_eq!(Profile::from_mode("default"), Profile::Small);
        assert_eq!(Profile::from_mode("anything-else"), Profile::Small);
    }
}

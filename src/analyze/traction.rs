use crate::types::metadata::RepoMetadata;
use crate::types::scoring::Score;
use chrono::{DateTime, Utc};

pub fn user_traction_score(metadata: &RepoMetadata, now: DateTime<Utc>) -> Score {
    let mut score: f64 = 0.0;

    score += match metadata.star_count {
        stars if stars > 1000 => 50.0,
        stars if stars > 100 => 30.0,
        stars if stars > 10 => 15.0,
        _ => 0.0,
    };

    if let Some(days) = days_since_update(metadata, now) {
        if days < 7 {
            score += 30.0;
        } else if days < 30 {
            score += 20.0;
        } else if days < 90 {
            score += 10.0;
        }
    }

    score.clamp(0.0, 100.0)
}

/// A missing or unparseable timestamp contributes nothing to the recency
/// term.
fn days_since_update(metadata: &RepoMetadata, now: DateTime<Utc>) -> Option<i64> {
    let raw = metadata.last_updated.as_deref()?;
    let updated = DateTime::parse_from_rfc3339(raw).ok()?;
    Some((now - updated.with_timezone(&Utc)).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn meta(stars: u64, last_updated: Option<&str>) -> RepoMetadata {
        RepoMetadata {
            star_count: stars,
            last_updated: last_updated.map(str::to_string),
            ..RepoMetadata::default()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        "2026-02-15T12:00:00Z"
            .parse()
            .expect("fixed timestamp should parse")
    }

    #[test]
    fn no_stars_no_timestamp_scores_zero() {
        assert_eq!(user_traction_score(&meta(0, None), fixed_now()), 0.0);
    }

    #[test]
    fn recent_update_adds_thirty() {
        let now = fixed_now();
        let two_days_ago = (now - Duration::days(2)).to_rfc3339();
        let score = user_traction_score(&meta(0, Some(&two_days_ago)), now);
        assert_eq!(score, 30.0);
    }

    #[test]
    fn stale_update_adds_ten() {
        let now = fixed_now();
        let sixty_days_ago = (now - Duration::days(60)).to_rfc3339();
        let score = user_traction_score(&meta(0, Some(&sixty_days_ago)), now);
        assert_eq!(score, 10.0);
    }

    #[test]
    fn ancient_update_adds_nothing() {
        let now = fixed_now();
        let year_ago = (now - Duration::days(365)).to_rfc3339();
        assert_eq!(user_traction_score(&meta(0, Some(&year_ago)), now), 0.0);
    }

    #[test]
    fn garbage_timestamp_degrades_to_zero() {
        let score = user_traction_score(&meta(0, Some("not a date")), fixed_now());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn star_tiers_combine_with_recency() {
        let now = fixed_now();
        let yesterday = (now - Duration::days(1)).to_rfc3339();
        let score = user_traction_score(&meta(1500, Some(&yesterday)), now);
        assert_eq!(score, 80.0);
    }

    #[test]
    fn more_stars_never_score_less() {
        let now = fixed_now();
        let five = user_traction_score(&meta(5, None), now);
        let hundred_fifty = user_traction_score(&meta(150, None), now);
        assert!(hundred_fifty >= five);
    }
}

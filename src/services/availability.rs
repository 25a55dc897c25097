use serde::Serialize;
use tracing::warn;

use crate::models::country::{Country, COUNTRIES};
use crate::services::content::ContentSource;
use crate::types::external::RemoteCountry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub source_available: bool,
    /// True when no target was requested.
    pub target_available: bool,
    /// The country list could not be fetched; both flags are false.
    pub fetch_failed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Available,
    TargetUnavailable,
    SourceUnavailable,
    Unreachable,
}

impl Availability {
    pub fn unreachable() -> Self {
        Availability { source_available: false, target_available: false, fetch_failed: true }
    }

    pub fn from_list(list: &[RemoteCountry], source: &str, target: Option<&str>) -> Self {
        Availability {
            source_available: is_available(list, source),
            target_available: target.map_or(true, |t| is_available(list, t)),
            fetch_failed: false,
        }
    }

    /// Target is checked before source so the visitor hears about the
    /// destination first.
    pub fn verdict(&self) -> Verdict {
        if self.fetch_failed {
            Verdict::Unreachable
        } else if !self.target_available {
            Verdict::TargetUnavailable
        } else if !self.source_available {
            Verdict::SourceUnavailable
        } else {
            Verdict::Available
        }
    }
}

/// Listed with an explicit `isAvailable: true`; anything else is unavailable.
pub fn is_available(list: &[RemoteCountry], code: &str) -> bool {
    list.iter()
        .find(|c| c.code.trim().eq_ignore_ascii_case(code.trim()))
        .and_then(|c| c.is_available)
        .unwrap_or(false)
}

pub async fn resolve(content: &dyn ContentSource, source: &str, target: Option<&str>) -> Availability {
    match content.countries().await {
        Ok(list) => Availability::from_list(&list, source, target),
        Err(e) => {
            warn!(source_country = source, target_country = target, "country availability fetch failed: {}", e);
            Availability::unreachable()
        }
    }
}

/// Seed registry with availability taken from the CMS. When the list cannot
/// be fetched the seed flags are kept.
pub async fn registry_with_availability(content: &dyn ContentSource) -> Vec<Country> {
    match content.countries().await {
        Ok(list) => COUNTRIES
            .iter()
            .map(|c| c.with_availability(is_available(&list, c.code)))
            .collect(),
        Err(e) => {
            warn!("country list fetch failed, serving seed availability: {}", e);
            COUNTRIES.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> Vec<RemoteCountry> {
        vec![
            RemoteCountry::new("US", true),
            RemoteCountry::new("in", true),
            RemoteCountry::new("gb", false),
            RemoteCountry {
                is_available: None,
                ..RemoteCountry::new("ca", true)
            },
        ]
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_available(&list(), "us"));
        assert!(is_available(&list(), "IN"));
    }

    #[test]
    fn missing_false_or_absent_mean_unavailable() {
        assert!(!is_available(&list(), "gb"));
        assert!(!is_available(&list(), "ca"));
        assert!(!is_available(&list(), "mx"));
    }

    #[test]
    fn target_wins_when_both_unavailable() {
        let a = Availability::from_list(&list(), "gb", Some("mx"));
        assert!(!a.source_available && !a.target_available);
        assert_eq!(a.verdict(), Verdict::TargetUnavailable);
    }

    #[test]
    fn source_reported_when_target_ok() {
        let a = Availability::from_list(&list(), "gb", Some("in"));
        assert_eq!(a.verdict(), Verdict::SourceUnavailable);
    }

    #[test]
    fn no_target_only_checks_source() {
        assert_eq!(Availability::from_list(&list(), "us", None).verdict(), Verdict::Available);
        assert_eq!(Availability::from_list(&list(), "gb", None).verdict(), Verdict::SourceUnavailable);
    }

    #[test]
    fn unreachable_is_fail_closed_and_distinct() {
        let a = Availability::unreachable();
        assert!(!a.source_available && !a.target_available);
        assert_eq!(a.verdict(), Verdict::Unreachable);
    }
}

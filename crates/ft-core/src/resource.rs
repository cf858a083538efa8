//! User-curated reference links.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid regex"));


/// Why a custom resource was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Title is required")]
    MissingTitle,

    #[error("URL is required")]
    MissingUrl,

    #[error("Please enter a valid URL")]
    InvalidUrl { url: String },

    #[error("Category is required")]
    MissingCategory,
}

/// A link the user added, grouped under a free-form category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomResource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: String,
}

impl CustomResource {
    /// Validates the form fields and assigns a fresh id.
    ///
    /// Fields are trimmed. A URL without an `http(s)://` scheme gets
    /// `https://` prepended before it is checked.
    pub fn create(title: &str, url: &str, category: &str) -> Result<Self, ResourceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ResourceError::MissingTitle);
        }
        let url = url.trim();
        if url.is_empty() {
            return Err(ResourceError::MissingUrl);
        }
        let url = normalize_url(url);
        if !is_valid_url(&url) {
            return Err(ResourceError::InvalidUrl { url });
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(ResourceError::MissingCategory);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            url,
            category: category.to_string(),
        })
    }
}

/// Prepends `https://` unless an http(s) scheme is already present.
pub fn normalize_url(url: &str) -> String {
    if SCHEME_RE.is_match(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Whether `url` parses as an absolute URL with a host.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.host().is_some())
}

/// Groups resources by category in first-seen order.
pub fn group_by_category(resources: &[CustomResource]) -> Vec<(&str, Vec<&CustomResource>)> {
    let mut groups: Vec<(&str, Vec<&CustomResource>)> = Vec::new();
    for resource in resources {
        match groups.iter_mut().find(|(c, _)| *c == resource.category) {
            Some((_, items)) => items.push(resource),
            None => groups.push((resource.category.as_str(), vec![resource])),
        }
    }
    groups
}

/// A built-in reference link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultResource {
    pub title: &'static str,
    pub url: &'static str,
}

/// Links that are always listed, ahead of any custom resources.
pub const DEFAULT_RESOURCES: &[DefaultResource] = &[
    DefaultResource {
        title: "Urethral Stricture - Diagnosis and Treatment",
        url: "https://www.mayoclinic.org/diseases-conditions/urethral-stricture/diagnosis-treatment/drc-20351735",
    },
    DefaultResource {
        title: "Urethral Stricture Disease: Symptoms, Diagnosis & Treatment",
        url: "https://www.urologyhealth.org/urology-a-z/u/urethral-stricture-disease",
    },
    DefaultResource {
        title: "Benign Prostatic Hyperplasia (BPH) - Mayo Clinic",
        url: "https://www.mayoclinic.org/diseases-conditions/benign-prostatic-hyperplasia/symptoms-causes/syc-20370087",
    },
    DefaultResource {
        title: "Benign Prostatic Hyperplasia (BPH)",
        url: "https://www.urologyhealth.org/urology-a-z/b/benign-prostatic-hyperplasia-(bph)",
    },
    DefaultResource {
        title: "Managing Urethral Strictures",
        url: "https://www.urologyhealth.org/urologic-conditions/urethral-stricture-disease",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_trims_and_adds_scheme() {
        let r = CustomResource::create("  Pelvic floor  ", "example.com/exercises", " Exercise ")
            .unwrap();
        assert_eq!(r.title, "Pelvic floor");
        assert_eq!(r.url, "https://example.com/exercises");
        assert_eq!(r.category, "Exercise");
        assert!(Uuid::parse_str(&r.id).is_ok());
    }

    #[test]
    fn create_keeps_existing_scheme() {
        let r = CustomResource::create("Doc", "HTTP://example.com", "Docs").unwrap();
        assert_eq!(r.url, "HTTP://example.com");
    }

    #[test]
    fn create_checks_fields_in_order() {
        assert_eq!(
            CustomResource::create("", "", "").unwrap_err(),
            ResourceError::MissingTitle
        );
        assert_eq!(
            CustomResource::create("t", " ", "").unwrap_err(),
            ResourceError::MissingUrl
        );
        let err = CustomResource::create("t", "not a url", "").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid URL");
        assert_eq!(
            CustomResource::create("t", "example.com", "").unwrap_err(),
            ResourceError::MissingCategory
        );
    }

    #[test]
    fn url_shape() {
        for ok in [
            "https://a.org",
            "http://localhost:8080/x?y=1",
            "https://x.io#top",
            "https://user@example.com/",
            "http://user:pw@host.org",
            "https://[::1]/docs",
        ] {
            assert!(is_valid_url(ok), "{ok}");
        }
        for bad in ["https://", "https://a b.org", "https://:80", "https://user@", "https://[::1"] {
            assert!(!is_valid_url(bad), "{bad}");
        }
    }

    #[test]
    fn create_accepts_userinfo_and_ipv6_hosts() {
        let r = CustomResource::create("Login", "user:pw@host.org", "Tools").unwrap();
        assert_eq!(r.url, "https://user:pw@host.org");
        let r = CustomResource::create("Local", "https://[::1]/docs", "Tools").unwrap();
        assert_eq!(r.url, "https://[::1]/docs");
    }

    #[test]
    fn ids_are_unique() {
        let a = CustomResource::create("a", "a.org", "c").unwrap();
        let b = CustomResource::create("a", "a.org", "c").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let make = |title: &str, category: &str| CustomResource {
            id: title.to_string(),
            title: title.to_string(),
            url: "https://example.com".to_string(),
            category: category.to_string(),
        };
        let resources = vec![make("1", "B"), make("2", "A"), make("3", "B")];
        let groups = group_by_category(&resources);
        let shape: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|(c, items)| (*c, items.iter().map(|r| r.title.as_str()).collect()))
            .collect();
        assert_eq!(shape, vec![("B", vec!["1", "3"]), ("A", vec!["2"])]);
    }

    #[test]
    fn default_resources_are_valid_urls() {
        assert_eq!(DEFAULT_RESOURCES.len(), 5);
        assert!(DEFAULT_RESOURCES.iter().all(|r| is_valid_url(r.url)));
    }
}

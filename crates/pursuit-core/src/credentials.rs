//! Credential side-channel over the company tag list.
//!
//! The persisted company row has a tag array but no credential columns, so the
//! application portal account id, password and site URL ride along as tags
//! with reserved prefixes:
//!
//! | field      | prefix           |
//! |------------|------------------|
//! | account id | `__account_id:`  |
//! | password   | `__password:`    |
//! | site URL   | `__site_url:`    |
//!
//! Any other tag starting with the reserved marker `__` is kept verbatim
//! across edits. Callers go through [`CredentialCodec`] only, so the encoding
//! can move to dedicated columns without touching them.
//!
//! ```rust
//! use pursuit_core::credentials::{CredentialCodec, Credentials, TagPrefixCodec};
//!
//! let credentials = Credentials {
//!     account_id: Some("me@example.com".to_string()),
//!     ..Default::default()
//! };
//! let tags = TagPrefixCodec.encode(&credentials, &["remote".to_string()], &[]);
//! assert_eq!(tags, vec!["__account_id:me@example.com", "remote"]);
//!
//! let decoded = TagPrefixCodec.decode(&tags);
//! assert_eq!(decoded.credentials, credentials);
//! assert_eq!(decoded.ordinary, vec!["remote"]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Marker shared by every reserved tag.
pub const RESERVED_MARKER: &str = "__";
pub const ACCOUNT_ID_PREFIX: &str = "__account_id:";
pub const PASSWORD_PREFIX: &str = "__password:";
pub const SITE_URL_PREFIX: &str = "__site_url:";

/// Login details for a company's application portal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub account_id: Option<String>,
    pub password: Option<String>,
    pub site_url: Option<String>,
}

impl Credentials {
    pub fn is_empty(&self) -> bool {
        [&self.account_id, &self.password, &self.site_url]
            .iter()
            .all(|field| field.as_deref().map_or(true, str::is_empty))
    }
}

/// A tag list split into its three kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTags {
    pub credentials: Credentials,
    /// User-authored tags
    pub ordinary: Vec<String>,
    /// Reserved-prefixed tags this codec does not recognise
    pub reserved: Vec<String>,
}

/// Encodes credentials into, and recovers them from, a company tag list.
pub trait CredentialCodec: Send + Sync {
    /// Build the persisted tag list from credentials, ordinary tags and
    /// preserved reserved tags.
    fn encode(
        &self,
        credentials: &Credentials,
        ordinary: &[String],
        reserved: &[String],
    ) -> Vec<String>;

    /// Split a persisted tag list.
    fn decode(&self, tags: &[String]) -> DecodedTags;
}

/// The reserved-prefix encoding described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagPrefixCodec;

impl CredentialCodec for TagPrefixCodec {
    fn encode(
        &self,
        credentials: &Credentials,
        ordinary: &[String],
        reserved: &[String],
    ) -> Vec<String> {
        let credential_tags = [
            (ACCOUNT_ID_PREFIX, &credentials.account_id),
            (PASSWORD_PREFIX, &credentials.password),
            (SITE_URL_PREFIX, &credentials.site_url),
        ]
        .into_iter()
        .filter_map(|(prefix, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some(format!("{prefix}{v}")),
            _ => None,
        });

        let mut seen = HashSet::new();
        credential_tags
            .chain(reserved.iter().cloned())
            .chain(ordinary.iter().cloned())
            .filter(|tag| seen.insert(tag.clone()))
            .collect()
    }

    fn decode(&self, tags: &[String]) -> DecodedTags {
        let mut decoded = DecodedTags::default();
        for tag in tags {
            if let Some(value) = tag.strip_prefix(ACCOUNT_ID_PREFIX) {
                decoded.credentials.account_id = Some(value.to_string());
            } else if let Some(value) = tag.strip_prefix(PASSWORD_PREFIX) {
                decoded.credentials.password = Some(value.to_string());
            } else if let Some(value) = tag.strip_prefix(SITE_URL_PREFIX) {
                decoded.credentials.site_url = Some(value.to_string());
            } else if tag.starts_with(RESERVED_MARKER) {
                decoded.reserved.push(tag.clone());
            } else {
                decoded.ordinary.push(tag.clone());
            }
        }
        decoded
    }
}

/// Split the comma-separated free-text tag field, trimming entries and
/// dropping empty ones.
pub fn split_tag_text(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_encode_skips_empty_credentials() {
        let credentials = Credentials {
            account_id: Some(String::new()),
            password: Some("hunter2".to_string()),
            site_url: None,
        };
        let encoded = TagPrefixCodec.encode(&credentials, &tags(&["go"]), &[]);
        assert_eq!(encoded, tags(&["__password:hunter2", "go"]));
    }

    #[test]
    fn test_encode_deduplicates() {
        let encoded = TagPrefixCodec.encode(
            &Credentials::default(),
            &tags(&["remote", "fintech", "remote"]),
            &[],
        );
        assert_eq!(encoded, tags(&["remote", "fintech"]));
    }

    #[test]
    fn test_decode_separates_all_kinds() {
        let decoded = TagPrefixCodec.decode(&tags(&[
            "remote",
            "__account_id:alice",
            "__password:pa:ss",
            "__site_url:https://careers.example.com",
            "__legacy:keep-me",
        ]));

        assert_eq!(decoded.ordinary, tags(&["remote"]));
        assert_eq!(decoded.reserved, tags(&["__legacy:keep-me"]));
        assert_eq!(decoded.credentials.account_id.as_deref(), Some("alice"));
        // Only the prefix is stripped, colons in the value survive
        assert_eq!(decoded.credentials.password.as_deref(), Some("pa:ss"));
        assert_eq!(
            decoded.credentials.site_url.as_deref(),
            Some("https://careers.example.com")
        );
    }

    #[test]
    fn test_decode_last_duplicate_wins() {
        let decoded = TagPrefixCodec.decode(&tags(&["__account_id:old", "__account_id:new"]));
        assert_eq!(decoded.credentials.account_id.as_deref(), Some("new"));
    }

    #[test]
    fn test_encode_decode_is_idempotent() {
        let original = tags(&[
            "__site_url:https://jobs.example.com",
            "__account_id:bob",
            "__unknown:x",
            "design",
            "tokyo",
        ]);
        let once = {
            let d = TagPrefixCodec.decode(&original);
            TagPrefixCodec.encode(&d.credentials, &d.ordinary, &d.reserved)
        };
        let twice = {
            let d = TagPrefixCodec.decode(&once);
            TagPrefixCodec.encode(&d.credentials, &d.ordinary, &d.reserved)
        };

        assert_eq!(once, twice);
        let as_set = |v: &[String]| v.iter().cloned().collect::<HashSet<_>>();
        assert_eq!(as_set(&once), as_set(&original));
    }

    #[test]
    fn test_credentials_is_empty() {
        assert!(Credentials::default().is_empty());
        assert!(Credentials {
            password: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
        assert!(!Credentials {
            site_url: Some("https://x.example".to_string()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_split_tag_text() {
        assert_eq!(split_tag_text(" a ,b,, c "), tags(&["a", "b", "c"]));
        assert!(split_tag_text("").is_empty());
    }
}

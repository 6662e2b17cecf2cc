//! Property-based tests for output interpretation and naming logic.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use proptest::prelude::*;

use petrel_cli::domain::mount::repo_cache_key;
use petrel_cli::domain::{EngineStatus, ImageReference, ToolVersion};

// ============================================================================
// EngineStatus::from_status_text()
// ============================================================================

proptest! {
    /// Any text containing `running` in any case is a running engine.
    #[test]
    fn prop_running_anywhere_means_running(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        upper in any::<bool>(),
    ) {
        let word = if upper { "RUNNING" } else { "running" };
        let text = format!("{prefix}{word}{suffix}");
        prop_assert_eq!(EngineStatus::from_status_text(&text), EngineStatus::Running);
    }

    /// Text without the word is never running, whatever the exit code was.
    #[test]
    fn prop_text_without_running_is_stopped(text in "[a-mo-z ]{0,40}") {
        prop_assert_eq!(EngineStatus::from_status_text(&text), EngineStatus::Stopped);
    }
}

// ============================================================================
// ToolVersion::from_version_output()
// ============================================================================

proptest! {
    /// The version is the last whitespace-separated token.
    #[test]
    fn prop_version_is_last_token(
        words in prop::collection::vec("[a-z-]{1,10}", 0..4),
        version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        trailing in "[ \t\n]{0,3}",
    ) {
        let mut text = words.join(" ");
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&version);
        text.push_str(&trailing);
        let parsed = ToolVersion::from_version_output(&text).expect("version");
        prop_assert_eq!(parsed.as_str(), version.as_str());
    }

    /// Whitespace-only output has no version.
    #[test]
    fn prop_blank_output_has_no_version(text in "[ \t\n]{0,10}") {
        prop_assert!(ToolVersion::from_version_output(&text).is_none());
    }
}

// ============================================================================
// ImageReference and repo cache keys
// ============================================================================

proptest! {
    /// A registry port is never mistaken for a tag.
    #[test]
    fn prop_registry_port_stays_in_repository(
        host in "[a-z]{1,10}",
        port in 1u16..,
        name in "[a-z]{1,10}",
    ) {
        let repository = format!("{host}:{port}/{name}");
        let parsed = ImageReference::parse(&repository);
        prop_assert_eq!(&parsed.repository, &repository);
        prop_assert!(parsed.is_latest());
    }

    /// Cache keys are `<basename>-<8 hex chars>`.
    #[test]
    fn prop_repo_cache_key_format(parent in "[a-z]{1,8}", name in "[a-z]{1,12}") {
        let key = repo_cache_key(&PathBuf::from(format!("/{parent}/{name}")));
        let (base, hash) = key.rsplit_once('-').expect("separator");
        prop_assert_eq!(base, name.as_str());
        prop_assert_eq!(hash.len(), 8);
        prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn same_basename_in_different_parents_gets_distinct_keys() {
    let a = repo_cache_key(&PathBuf::from("/one/repo"));
    let b = repo_cache_key(&PathBuf::from("/two/repo"));
    assert_ne!(a, b);
}

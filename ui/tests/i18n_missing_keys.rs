//! Locale lint for the embedded Fluent files.
//!
//! The `fl!` macro already proves at compile time that every key a component
//! asks for exists in the `en` reference file. These tests cover the other
//! direction: the translations must not drift away from that reference.

use std::collections::{BTreeMap, BTreeSet};

const EN: &str = include_str!("../i18n/en/avelle-ui.ftl");
const UK: &str = include_str!("../i18n/uk/avelle-ui.ftl");

/// Locales checked against the `en` reference. Register new locales here.
const TRANSLATIONS: &[(&str, &str)] = &[("uk", UK)];

#[test]
fn reference_locale_is_non_empty_and_duplicate_free() {
    let keys = message_keys(EN);
    assert!(!keys.is_empty(), "en reference defines no messages");
    assert_duplicate_free("en", &keys);
}

#[test]
fn translations_cover_every_reference_key() {
    let reference = key_set(EN);
    for (locale, src) in TRANSLATIONS {
        let present = key_set(src);
        let missing: Vec<String> = reference.difference(&present).cloned().collect();
        assert!(
            missing.is_empty(),
            "locale {locale} is missing {} key(s):\n  {}",
            missing.len(),
            missing.join("\n  ")
        );
    }
}

#[test]
fn translations_carry_no_stray_keys() {
    let reference = key_set(EN);
    for (locale, src) in TRANSLATIONS {
        let present = key_set(src);
        let stray: Vec<String> = present.difference(&reference).cloned().collect();
        assert!(
            stray.is_empty(),
            "locale {locale} defines keys absent from en (rename or delete them):\n  {}",
            stray.join("\n  ")
        );
    }
}

#[test]
fn translations_are_duplicate_free() {
    for (locale, src) in TRANSLATIONS {
        assert_duplicate_free(locale, &message_keys(src));
    }
}

/// Variables referenced by a message must survive translation, or runtime
/// formatting silently degrades.
#[test]
fn translated_messages_keep_their_variables() {
    let reference = placeable_variables(EN);
    for (locale, src) in TRANSLATIONS {
        let translated = placeable_variables(src);
        for (key, names) in &reference {
            if let Some(theirs) = translated.get(key) {
                assert_eq!(
                    theirs, names,
                    "key {key}: en references {names:?}, {locale} references {theirs:?}"
                );
            }
        }
    }
}

/// Message keys in definition order.
///
/// A line heuristic, not a Fluent parser: a definition is `key = value`
/// starting a non-comment line. Attribute lines (leading `.`) and indented
/// pattern continuations never match, which is all the precision these
/// files need.
fn message_keys(src: &str) -> Vec<String> {
    src.lines()
        .filter_map(|line| {
            if line.starts_with(['#', '.', ' ', '\t']) {
                return None;
            }
            let (key, _value) = line.split_once('=')?;
            let key = key.trim();
            let well_formed = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            well_formed.then(|| key.to_string())
        })
        .collect()
}

fn key_set(src: &str) -> BTreeSet<String> {
    message_keys(src).into_iter().collect()
}

/// The `$variable` names each single-line message value references.
fn placeable_variables(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut vars = BTreeMap::new();
    for line in src.lines() {
        if line.starts_with(['#', '.', ' ', '\t']) {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(' ') {
            continue;
        }
        let names: BTreeSet<String> = value
            .split('$')
            .skip(1)
            .map(|tail| {
                tail.chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                    .collect::<String>()
            })
            .filter(|name| !name.is_empty())
            .collect();
        if !names.is_empty() {
            vars.insert(key.to_string(), names);
        }
    }
    vars
}

fn assert_duplicate_free(locale: &str, keys: &[String]) {
    let mut seen = BTreeSet::new();
    let dups: Vec<&String> = keys.iter().filter(|key| !seen.insert(key.as_str())).collect();
    assert!(dups.is_empty(), "duplicate message keys in {locale}: {dups:?}");
}

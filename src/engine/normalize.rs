//! Name normalization.
//!
//! Card names and player input go through the same rules:
//! lowercase, drop everything outside `[a-z0-9 ]`, trim.
//!
//! Keys compare equal when their non-space characters are equal, so
//! "yogg saron" finds "Yogg-Saron" (key `yoggsaron`) and "fire-ball!" finds
//! "Fireball".

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Normalize a card name or a raw guess.
///
/// ```
/// use card_recall::engine::normalize_key;
///
/// assert_eq!(normalize_key("  Fire-ball! "), "fireball");
/// assert_eq!(normalize_key("Whizbang's Workshop"), "whizbangs workshop");
/// assert_eq!(normalize_key("?!"), "");
/// ```
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' '))
        .collect();
    kept.trim().to_string()
}

/// Normalized identity of a card name.
///
/// Built once from the display name and never recomputed.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Normalize a display name into its key.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(normalize_key(name))
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name normalized to nothing (e.g. all punctuation).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn compact(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().filter(|b| *b != b' ')
    }
}

// Spaces never separate two keys: "fi re ba ll" equals "fireball". Any
// guess that differs from a name only in spacing therefore matches it.
impl PartialEq for IdentityKey {
    fn eq(&self, other: &Self) -> bool {
        self.compact().eq(other.compact())
    }
}

impl Hash for IdentityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.compact() {
            state.write_u8(b);
        }
        state.write_u8(0xff);
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A usable guess: normalized player input that is not empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GuessKey(IdentityKey);

impl GuessKey {
    /// Normalize raw input. Returns `None` when nothing is left.
    ///
    /// ```
    /// use card_recall::engine::GuessKey;
    ///
    /// assert!(GuessKey::parse("   ").is_none());
    /// assert_eq!(GuessKey::parse("Yogg Saron").unwrap().as_str(), "yogg saron");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key = IdentityKey::from_name(raw);
        (!key.is_empty()).then_some(Self(key))
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Does this guess name the card with `key`?
    #[must_use]
    pub fn matches(&self, key: &IdentityKey) -> bool {
        self.0 == *key
    }
}

impl std::fmt::Display for GuessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rustc_hash::FxHasher;

    fn hash_of(key: &IdentityKey) -> u64 {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_strips_punctuation_and_case() {
        assert_eq!(normalize_key("Yogg-Saron, Hope's End"), "yoggsaron hopes end");
        assert_eq!(normalize_key("FIREBALL"), "fireball");
        assert_eq!(normalize_key("C'Thun"), "cthun");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_key("  arcane shot  "), "arcane shot");
        assert_eq!(normalize_key("\tarcane shot\n"), "arcane shot");
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        assert_eq!(normalize_key("Ragnaros ☄"), "ragnaros");
        assert_eq!(normalize_key("Éclair"), "clair");
    }

    #[test]
    fn test_keys_ignore_spaces_for_equality() {
        let card = IdentityKey::from_name("Yogg-Saron");
        let guess = IdentityKey::from_name("yogg saron");
        assert_eq!(card.as_str(), "yoggsaron");
        assert_eq!(guess.as_str(), "yogg saron");
        assert_eq!(card, guess);
        assert_eq!(hash_of(&card), hash_of(&guess));
    }

    #[test]
    fn test_arbitrary_spacing_still_matches() {
        let guess = GuessKey::parse("fi re ba ll").unwrap();
        assert!(guess.matches(&IdentityKey::from_name("Fireball")));
    }

    #[test]
    fn test_distinct_names_differ() {
        assert_ne!(
            IdentityKey::from_name("Fireball"),
            IdentityKey::from_name("Fireballs")
        );
    }

    #[test]
    fn test_guess_rejects_empty() {
        assert!(GuessKey::parse("").is_none());
        assert!(GuessKey::parse("  ").is_none());
        assert!(GuessKey::parse("!!!").is_none());
        assert!(GuessKey::parse("- -").is_none());
    }

    #[test]
    fn test_guess_matches_punctuated_name() {
        let guess = GuessKey::parse("fire-ball!").unwrap();
        assert!(guess.matches(&IdentityKey::from_name("Fireball")));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in ".*") {
            let once = normalize_key(&s);
            prop_assert_eq!(normalize_key(&once), once);
        }

        #[test]
        fn prop_normalized_alphabet(s in ".*") {
            let key = normalize_key(&s);
            prop_assert!(key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | ' ')));
            prop_assert_eq!(key.trim(), key.as_str());
        }

        #[test]
        fn prop_equal_keys_hash_equal(a in "[a-c ]{0,6}", b in "[a-c ]{0,6}") {
            let (ka, kb) = (IdentityKey::from_name(&a), IdentityKey::from_name(&b));
            if ka == kb {
                prop_assert_eq!(hash_of(&ka), hash_of(&kb));
            }
        }
    }
}

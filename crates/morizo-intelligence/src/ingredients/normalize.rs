// ABOUTME: Ingredient name normalization strategies (trim, case folding, kana folding)
// ABOUTME: Produces the canonical comparable form used by the denylist and the matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! Ingredient name normalization
//!
//! Recipe sources and pantry inventories spell the same ingredient in
//! different ways. Japanese text in particular mixes katakana and hiragana
//! freely ("ニンジン" and "にんじん" are the same carrot). Normalization
//! collapses those variants so that plain string comparison works.

/// First katakana code point folded to hiragana (ァ, U+30A1)
const KATAKANA_START: char = '\u{30A1}';
/// Last katakana code point folded to hiragana (ヶ, U+30F6)
const KATAKANA_END: char = '\u{30F6}';
/// Distance between a katakana code point and its hiragana counterpart
const KATAKANA_HIRAGANA_OFFSET: u32 = 0x60;

/// Strategy that turns a raw ingredient name into its canonical form.
///
/// Implementations must be pure and total: the same input always produces
/// the same output, no input fails, and applying the strategy twice gives
/// the same result as applying it once.
pub trait NameNormalizer: Send + Sync {
    /// Normalize one ingredient name
    fn normalize(&self, name: &str) -> String;
}

/// Default strategy for Japanese deployments: trim, lowercase, then fold
/// katakana into hiragana.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KanaFoldingNormalizer;

impl NameNormalizer for KanaFoldingNormalizer {
    fn normalize(&self, name: &str) -> String {
        normalize_ingredient_name(name)
    }
}

/// Locale-neutral strategy: trim and lowercase only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseFoldingNormalizer;

impl NameNormalizer for CaseFoldingNormalizer {
    fn normalize(&self, name: &str) -> String {
        trim_name(name).to_lowercase()
    }
}

/// Normalize an ingredient name with the default (kana folding) rules.
///
/// Steps, in order: trim surrounding whitespace and byte order marks,
/// Unicode lowercase, then map every katakana character in `ァ..=ヶ` to its
/// hiragana counterpart.
///
/// ```
/// use morizo_intelligence::ingredients::normalize_ingredient_name;
///
/// assert_eq!(normalize_ingredient_name("  ニンジン "), "にんじん");
/// assert_eq!(normalize_ingredient_name("Pork Belly"), "pork belly");
/// ```
#[must_use]
pub fn normalize_ingredient_name(name: &str) -> String {
    katakana_to_hiragana(&trim_name(name).to_lowercase())
}

/// Strip surrounding whitespace and byte order marks
///
/// Text pasted from other apps sometimes keeps a leading U+FEFF.
fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Convert katakana characters to hiragana, leaving everything else as is.
///
/// The prolonged sound mark `ー` (U+30FC) and the middle dot `・` lie outside
/// the folded range and are kept.
#[must_use]
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars().map(fold_katakana_char).collect()
}

fn fold_katakana_char(c: char) -> char {
    if (KATAKANA_START..=KATAKANA_END).contains(&c) {
        char::from_u32(u32::from(c) - KATAKANA_HIRAGANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

// ABOUTME: Staple and seasoning denylist for missing-ingredient detection
// ABOUTME: Terms are normalized once at construction and matched by bidirectional containment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::collections::HashSet;

use super::normalize::NameNormalizer;

/// Staples and seasonings most kitchens always have on hand.
///
/// Katakana and hiragana spellings are both listed because the list predates
/// kana folding; after normalization they collapse into one entry.
pub const JAPANESE_STAPLES: &[&str] = &[
    "水",
    "はちみつ",
    "ハチミツ",
    "塩",
    "こしょう",
    "胡椒",
    "コショウ",
    "醤油",
    "しょうゆ",
    "味噌",
    "みそ",
    "砂糖",
    "みりん",
    "酒",
    "料理酒",
    "酢",
    "油",
    "サラダ油",
    "オリーブオイル",
    "ごま油",
    "バター",
    "マヨネーズ",
    "ケチャップ",
    "ウスターソース",
    "オイスターソース",
    "豆板醤",
    "甜麺醤",
    "味の素",
    "だし",
    "だしの素",
    "コンソメ",
    "顆粒だし",
    "チューブ生姜",
    "チューブにんにく",
    "ネギ分",
    "ブラックペッパー",
    "ブラックペッパ",
    "ペッパー",
    "ガーリックパウダー",
    "ガーリックパウダ",
    "にんにくパウダー",
    "にんにくパウダ",
    "パルメザンチーズ",
    "パルメザン",
    "パルメザンチーズ粉",
    "めんつゆ",
    "メンツユ",
    "栗粉",
    "くりこ",
    "片栗粉",
    "かたくりこ",
    "スープ",
    "生姜",
    "しょうが",
    "ショウガ",
    "おろし生姜",
    "おろししょうが",
    "おろしショウガ",
    "にんにく",
    "ニンニク",
    "おろしにんにく",
    "おろしニンニク",
    "ガラスープの素",
    "がらスープの素",
    "鶏がらスープの素",
    "鶏ガラスープの素",
    "ＢＰ",
    "bp",
    "ベーキングパウダー",
    "ベーキングパウダ",
    "カレールー",
    "カレー粉",
    "米粉",
    "こめこ",
    "クレージーソルト",
    "コーンスターチ",
];

/// Immutable set of normalized staple terms that are never reported missing.
///
/// Entries keep the order in which they were first supplied so that logs and
/// listings are stable; duplicates and empty terms are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    terms: Vec<String>,
}

impl Denylist {
    /// Build a denylist from raw terms, normalizing each with `normalizer`
    pub fn new<I, S>(terms: I, normalizer: &dyn NameNormalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|term| normalizer.normalize(term.as_ref()))
            .filter(|term| !term.is_empty() && seen.insert(term.clone()))
            .collect();

        Self { terms }
    }

    /// The built-in Japanese staples list
    #[must_use]
    pub fn japanese_staples(normalizer: &dyn NameNormalizer) -> Self {
        Self::new(JAPANESE_STAPLES.iter().copied(), normalizer)
    }

    /// A denylist that excludes nothing
    #[must_use]
    pub const fn empty() -> Self {
        Self { terms: Vec::new() }
    }

    /// Whether an already-normalized ingredient name is a staple.
    ///
    /// Matches when the name contains an entry ("おろし生姜" contains "生姜")
    /// or an entry contains the name ("だし" inside "だしの素").
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.terms
            .iter()
            .any(|term| normalized.contains(term.as_str()) || term.contains(normalized))
    }

    /// Whether `normalized` is itself one of the entries
    #[must_use]
    pub fn contains_term(&self, normalized: &str) -> bool {
        self.terms.iter().any(|term| term == normalized)
    }

    /// Number of distinct normalized entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the denylist has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the normalized entries
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::japanese_staples(&super::normalize::KanaFoldingNormalizer)
    }
}

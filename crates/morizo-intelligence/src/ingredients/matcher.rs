// ABOUTME: Missing-ingredient matching engine comparing a recipe against the user's pantry
// ABOUTME: Exact and bidirectional substring matching over normalized names, staples excluded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use serde::Serialize;
use tracing::debug;

use super::denylist::Denylist;
use super::normalize::{KanaFoldingNormalizer, NameNormalizer};

/// Process-wide matcher with the default denylist and kana folding
static DEFAULT_MATCHER: LazyLock<IngredientMatcher> = LazyLock::new(IngredientMatcher::default);

/// Why a recipe ingredient was or was not reported missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// A staple or seasoning, never reported missing
    Denylisted,
    /// Normalized name is present in the available set
    ExactMatch,
    /// One name contains the other
    PartialMatch {
        /// Normalized available ingredient that matched
        matched: String,
    },
    /// Not available and not a staple
    Missing,
}

impl MatchOutcome {
    /// Whether this outcome reports the ingredient as missing
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Decision for one recipe ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientCheck {
    /// Ingredient as written in the recipe
    pub ingredient: String,
    /// Normalized form used for comparison
    pub normalized: String,
    /// Decision for this ingredient
    #[serde(flatten)]
    pub outcome: MatchOutcome,
}

/// Compares recipe ingredients against available ingredients.
///
/// The matcher holds only immutable configuration, so one instance can be
/// shared by every request handler.
#[derive(Clone)]
pub struct IngredientMatcher {
    denylist: Denylist,
    normalizer: Arc<dyn NameNormalizer>,
}

impl IngredientMatcher {
    /// Create a matcher from a denylist and a normalization strategy
    #[must_use]
    pub fn new(denylist: Denylist, normalizer: Arc<dyn NameNormalizer>) -> Self {
        Self {
            denylist,
            normalizer,
        }
    }

    /// Create a matcher whose default denylist is normalized with `normalizer`
    #[must_use]
    pub fn with_normalizer(normalizer: Arc<dyn NameNormalizer>) -> Self {
        let denylist = Denylist::japanese_staples(normalizer.as_ref());
        Self::new(denylist, normalizer)
    }

    /// Return the recipe ingredients the user does not have.
    ///
    /// When `available` is empty nothing is reported: with no inventory data
    /// there is nothing to judge against. Otherwise the result keeps the
    /// recipe's original spelling and order, duplicates included.
    #[must_use]
    pub fn missing_ingredients<R, A>(&self, recipe: &[R], available: &[A]) -> Vec<String>
    where
        R: AsRef<str>,
        A: AsRef<str>,
    {
        let missing: Vec<String> = self
            .classify(recipe, available)
            .into_iter()
            .filter(|check| check.outcome.is_missing())
            .map(|check| check.ingredient)
            .collect();

        debug!(
            recipe_count = recipe.len(),
            available_count = available.len(),
            missing_count = missing.len(),
            "Missing ingredient check completed"
        );

        missing
    }

    /// Classify every recipe ingredient.
    ///
    /// Returns an empty list when `available` is empty, mirroring
    /// [`Self::missing_ingredients`].
    #[must_use]
    pub fn classify<R, A>(&self, recipe: &[R], available: &[A]) -> Vec<IngredientCheck>
    where
        R: AsRef<str>,
        A: AsRef<str>,
    {
        if available.is_empty() {
            return Vec::new();
        }

        let available_set = AvailableSet::new(
            available
                .iter()
                .map(|name| self.normalizer.normalize(name.as_ref())),
        );

        recipe
            .iter()
            .map(|ingredient| {
                let normalized = self.normalizer.normalize(ingredient.as_ref());
                let outcome = self.outcome_for(&normalized, &available_set);
                IngredientCheck {
                    ingredient: ingredient.as_ref().to_owned(),
                    normalized,
                    outcome,
                }
            })
            .collect()
    }

    fn outcome_for(&self, normalized: &str, available: &AvailableSet) -> MatchOutcome {
        if self.denylist.matches(normalized) {
            return MatchOutcome::Denylisted;
        }

        if available.lookup.contains(normalized) {
            return MatchOutcome::ExactMatch;
        }

        available
            .ordered
            .iter()
            .find(|candidate| {
                normalized.contains(candidate.as_str()) || candidate.contains(normalized)
            })
            .map_or(MatchOutcome::Missing, |candidate| MatchOutcome::PartialMatch {
                matched: candidate.clone(),
            })
    }
}

/// Normalized available ingredients for one call.
///
/// Duplicates collapse; the first-seen order is kept so partial matches are
/// reported against the same candidate on every run.
struct AvailableSet {
    lookup: HashSet<String>,
    ordered: Vec<String>,
}

impl AvailableSet {
    fn new(names: impl Iterator<Item = String>) -> Self {
        let mut lookup = HashSet::new();
        let mut ordered = Vec::new();
        for name in names {
            if lookup.insert(name.clone()) {
                ordered.push(name);
            }
        }
        Self { lookup, ordered }
    }
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        Self::with_normalizer(Arc::new(KanaFoldingNormalizer))
    }
}

impl std::fmt::Debug for IngredientMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngredientMatcher")
            .field("denylist_len", &self.denylist.len())
            .finish_non_exhaustive()
    }
}

/// Missing-ingredient check with the default matcher.
///
/// An absent inventory (`None`) is treated exactly like an empty one.
///
/// ```
/// use morizo_intelligence::ingredients::get_missing_ingredients;
///
/// let available = ["豚バラ", "卵"];
/// let missing = get_missing_ingredients(&["豚バラ肉", "塩", "キャベツ"], Some(&available[..]));
/// assert_eq!(missing, vec!["キャベツ".to_owned()]);
/// ```
#[must_use]
pub fn get_missing_ingredients<R, A>(recipe: &[R], available: Option<&[A]>) -> Vec<String>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    DEFAULT_MATCHER.missing_ingredients(recipe, available.unwrap_or_default())
}

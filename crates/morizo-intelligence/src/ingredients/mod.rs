// ABOUTME: Ingredient module for pantry-aware recipe checks
// ABOUTME: Normalization strategies, staple denylist, and the missing-ingredient matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! # Ingredients Module
//!
//! Decides which ingredients a recipe needs that the user does not have.
//!
//! ## Pipeline
//!
//! 1. **Normalize** both lists (trim, lowercase, katakana → hiragana)
//! 2. **Skip staples** on the denylist (salt, soy sauce, oil, ginger, ...)
//! 3. **Match** exactly, then by containment in either direction
//!    ("豚バラ肉" is covered by "豚バラ")
//!
//! ## Example Usage
//!
//! ```
//! use morizo_intelligence::ingredients::IngredientMatcher;
//!
//! let matcher = IngredientMatcher::default();
//! let missing = matcher.missing_ingredients(&["ニンジン", "塩", "鶏もも肉"], &["にんじん"]);
//! assert_eq!(missing, vec!["鶏もも肉"]);
//! ```

/// Staple and seasoning denylist
pub mod denylist;
/// Missing-ingredient matching engine
pub mod matcher;
/// Name normalization strategies
pub mod normalize;

pub use denylist::{Denylist, JAPANESE_STAPLES};
pub use matcher::{get_missing_ingredients, IngredientCheck, IngredientMatcher, MatchOutcome};
pub use normalize::{
    katakana_to_hiragana, normalize_ingredient_name, CaseFoldingNormalizer, KanaFoldingNormalizer,
    NameNormalizer,
};

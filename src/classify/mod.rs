// src/classify/mod.rs
// =============================================================================
// This module decides which links look like product pages.
//
// Submodules:
// - rules: the rule table and the ProductClassifier predicate
//
// The classifier never touches the network, so it is tested on plain strings.
// =============================================================================

mod rules;

pub use rules::{ProductClassifier, DEFAULT_PRODUCT_PATTERNS};

//! URL canonicalization
//!
//! Canonical URLs are the identity keys for de-duplication across the whole
//! crawl: the frontier, the visited set, and every `links` list hold only
//! URLs that went through [`normalize_href`] (or [`canonicalize_seed`] for
//! the seed itself).

mod normalize;

pub use normalize::{canonicalize_seed, normalize_href};

//! Content cleaning engine
//!
//! Strips structural noise (scripts, styles, embedded media, form controls),
//! ad and boilerplate regions identified by class/id patterns, and comment
//! nodes from raw markup, then extracts a flattened text body from
//! block-level content tags. A second pass collects a whitelist of meta tags
//! and any JSON-LD structured data.
//!
//! Both passes are total over arbitrary, possibly malformed markup: parse
//! recovery is best-effort and failures degrade to empty output, never an
//! error.

mod metadata;
mod text;

pub use metadata::extract_metadata;
pub use text::Cleaner;

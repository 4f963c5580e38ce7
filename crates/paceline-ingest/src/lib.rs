//! Field normalization for raw race-timing rows.
//!
//! Raw rows arrive as loosely-typed string-keyed mappings from an external
//! retrieval/parsing collaborator. This crate cleans them and resolves the
//! canonical field set (name, time text, distance text, date text) through
//! a declarative header-synonym table, independent of header casing and
//! spacing variants. Nothing here fails on malformed data: a row with no
//! usable fields resolves to an empty field set.

pub mod error;
pub mod fields;
pub mod normalize;

pub use error::{Result, SourceError};
pub use fields::{CanonicalField, FieldSet, normalize_header, resolve_field, resolve_fields};
pub use normalize::{clean_row, display_text};

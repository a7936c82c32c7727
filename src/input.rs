//! Inputs of a fixup run: source usage, translation catalogs and their locales.
pub mod catalog;
pub mod locale;
pub mod source;

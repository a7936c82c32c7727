//! js-i18n-fixup
//!
//! JavaScript/TypeScript ソースで使われている翻訳キーと JSON 翻訳カタログを突き合わせて修正するツール

pub mod config;
pub mod error;
pub mod fixup;
pub mod indexer;
pub mod input;
pub mod reconcile;
pub mod syntax;
pub mod types;

pub use error::FixupError;
pub use fixup::{
    Fixup,
    FixupOutcome,
    FixupSummary,
};

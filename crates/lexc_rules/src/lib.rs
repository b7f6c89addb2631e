//! Rule compilation and longest-match transduction for Lexc.
//!
//! This crate provides:
//! - [`CategoryTable`] - Named classes of interchangeable graphemes
//! - [`RuleCompiler`] - Category expansion of authored rules
//! - [`CompiledRuleSet`] - Concrete rules bucketed by pattern length
//! - [`Transducer`] - Leftmost-longest substitution over a boundary-delimited word
//! - [`RuleSource`] - Front end for the `pattern>substitution` rule text format

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod pattern;
pub mod rule;
pub mod ruleset;
pub mod source;
pub mod transducer;

pub use category::CategoryTable;
pub use rule::{CompiledRule, RawRule, RuleCompiler};
pub use ruleset::{BucketEntry, CompiledRuleSet, RuleBucket};
pub use source::RuleSource;
pub use transducer::{Transducer, normalize, transcribe};

//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use id3::prelude::*;
//! ```

pub use crate::data::{Table, View};
pub use crate::error::{Id3Error, Result};
pub use crate::stats::{average_entropy, entropy, information_gain, likelihood, total_entropy};
pub use crate::tree::{
    learn, learn_with, Case, Decision, ExhaustedPolicy, Id3Classifier, LearnOptions, Outcome,
};

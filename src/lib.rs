//! id3: ID3 decision tree learning over lazy table views.
//!
//! Tables are scanned through composable [`data::View`]s: a view can filter
//! rows on a column value or hide a column, and views stack without copying
//! any data. The learner builds a tree by repeatedly splitting on the visible
//! attribute with the highest information gain.
//!
//! # Quick Start
//!
//! ```
//! use id3::prelude::*;
//!
//! let mut table = Table::from_reader(
//!     "outlook,wind,play\nsunny,weak,no\nsunny,strong,no\novercast,weak,yes\n".as_bytes(),
//! )
//! .expect("valid CSV");
//!
//! let tree = learn(&mut table, "play").expect("learnable");
//! assert_eq!(tree.column, "outlook");
//!
//! let predictions = tree.predict(&mut table).expect("known categories");
//! assert_eq!(predictions, vec!["no", "no", "yes"]);
//! ```
//!
//! # Modules
//!
//! - [`data`]: the in-memory [`data::Table`] and lazy select / drop views
//! - [`stats`]: likelihood, entropy and information gain over views
//! - [`tree`]: the decision tree model, the ID3 learner and [`tree::Id3Classifier`]
//! - [`serialization`]: JSON encoding of learned trees
//! - [`error`]: the crate error type

pub mod data;
pub mod error;
pub mod prelude;
pub mod serialization;
pub mod stats;
pub mod tree;

pub use error::{Id3Error, Result};
pub use tree::{learn, Decision, Id3Classifier};

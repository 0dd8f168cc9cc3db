//! Tree Serialization Module
//!
//! Decision trees persist as human-readable JSON:
//! ```text
//! {
//!   "column": "outlook",
//!   "cases": [
//!     { "value": "overcast", "class": "yes" },
//!     { "value": "sunny", "decide": { "column": "humidity", "cases": [...] } }
//!   ]
//! }
//! ```
//!
//! Every case carries exactly one of `class` (leaf) or `decide` (nested
//! decision), and every decision has at least one case. Decoding validates
//! the whole structure and never returns a partial tree.
//!
//! Only this lower-case field layout is read; keys are matched exactly.
//!
//! Example:
//! ```rust
//! use id3::data::weather;
//! use id3::serialization::{from_json, to_json};
//! use id3::tree::learn;
//!
//! let mut table = weather().expect("bundled dataset parses");
//! let tree = learn(&mut table, "play").expect("weather is learnable");
//!
//! let json = to_json(&tree, true).expect("trees always encode");
//! let decoded = from_json(&json).expect("round trip");
//! assert_eq!(decoded, tree);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Id3Error, Result};
use crate::tree::{Case, Decision, Outcome};

/// Wire form of a [`Decision`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DecisionRecord {
    column: String,
    cases: Vec<CaseRecord>,
}

/// Wire form of a [`Case`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CaseRecord {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decide: Option<DecisionRecord>,
}

impl From<&Decision> for DecisionRecord {
    fn from(decision: &Decision) -> Self {
        Self {
            column: decision.column.clone(),
            cases: decision
                .cases
                .iter()
                .map(|case| {
                    let (class, decide) = match &case.outcome {
                        Outcome::Class(label) => (Some(label.clone()), None),
                        Outcome::Decide(next) => (None, Some(DecisionRecord::from(next))),
                    };
                    CaseRecord {
                        value: case.value.clone(),
                        class,
                        decide,
                    }
                })
                .collect(),
        }
    }
}

impl TryFrom<DecisionRecord> for Decision {
    type Error = Id3Error;

    fn try_from(record: DecisionRecord) -> Result<Self> {
        if record.column.is_empty() {
            return Err(Id3Error::invalid_tree("decision has an empty column name"));
        }
        if record.cases.is_empty() {
            return Err(Id3Error::invalid_tree(format!(
                "decision on '{}' has no cases",
                record.column
            )));
        }

        let mut seen = HashSet::with_capacity(record.cases.len());
        let mut cases = Vec::with_capacity(record.cases.len());
        for case in record.cases {
            if !seen.insert(case.value.clone()) {
                return Err(Id3Error::invalid_tree(format!(
                    "decision on '{}' repeats case '{}'",
                    record.column, case.value
                )));
            }
            let outcome = match (case.class, case.decide) {
                (Some(label), None) => Outcome::Class(label),
                (None, Some(next)) => Outcome::Decide(Decision::try_from(next)?),
                (Some(_), Some(_)) => {
                    return Err(Id3Error::invalid_tree(format!(
                        "case '{}' of '{}' has both a class and a nested decision",
                        case.value, record.column
                    )))
                }
                (None, None) => {
                    return Err(Id3Error::invalid_tree(format!(
                        "case '{}' of '{}' has neither a class nor a nested decision",
                        case.value, record.column
                    )))
                }
            };
            cases.push(Case {
                value: case.value,
                outcome,
            });
        }

        Ok(Decision {
            column: record.column,
            cases,
        })
    }
}

impl Serialize for Decision {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DecisionRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Decision {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = DecisionRecord::deserialize(deserializer)?;
        Decision::try_from(record).map_err(serde::de::Error::custom)
    }
}

/// Encodes `decision` as JSON, indented if `pretty`.
///
/// # Errors
///
/// Returns [`Id3Error::Serialization`] if encoding fails.
pub fn to_json(decision: &Decision, pretty: bool) -> Result<String> {
    let record = DecisionRecord::from(decision);
    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}

/// Decodes a tree from JSON.
///
/// # Errors
///
/// Returns [`Id3Error::Serialization`] for malformed JSON or missing fields,
/// and [`Id3Error::InvalidTree`] for structurally invalid trees.
pub fn from_json(json: &str) -> Result<Decision> {
    let record: DecisionRecord = serde_json::from_str(json)?;
    Decision::try_from(record)
}

/// Writes `decision` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn save<P: AsRef<Path>>(decision: &Decision, path: P) -> Result<()> {
    fs::write(path, to_json(decision, true)?)?;
    Ok(())
}

/// Reads a tree written by [`save`].
///
/// # Errors
///
/// Returns I/O errors and the errors of [`from_json`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Decision> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

use serde::{Deserialize, Serialize};

/// The built-in sequence every CLI lookup runs against.
pub const DEFAULT_SEQUENCE: [i32; 6] = [1, 3, 4, 5, 6, 7];

/// Outcome of a single pair lookup.
///
/// `first` is always the earlier-seen index, `second` the scan position at
/// which the complement was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairResult {
    Found { first: usize, second: usize },
    NotFound,
}

impl PairResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PairResult::Found { .. })
    }

    pub fn indices(&self) -> Option<(usize, usize)> {
        match *self {
            PairResult::Found { first, second } => Some((first, second)),
            PairResult::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReport {
    pub target: i32,
    pub found: bool,
    pub indices: Option<[usize; 2]>,
    pub values: Option<[i32; 2]>,
}

impl PairReport {
    /// Builds the report for `result`, resolving indices against `sequence`.
    ///
    /// Indices that do not fall inside `sequence` produce the not-found shape.
    pub fn new(sequence: &[i32], target: i32, result: PairResult) -> Self {
        let resolved = result.indices().and_then(|(first, second)| {
            Some(([first, second], [*sequence.get(first)?, *sequence.get(second)?]))
        });

        match resolved {
            Some((indices, values)) => Self {
                target,
                found: true,
                indices: Some(indices),
                values: Some(values),
            },
            None => Self {
                target,
                found: false,
                indices: None,
                values: None,
            },
        }
    }
}

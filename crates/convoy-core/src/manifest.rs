//! Manifest parsing: the whitespace-token input format.
//!
//! # Token order
//!
//! ```text
//! N   — node count
//! B   — truck count
//! lo  — first truck id to emit
//! hi  — last truck id to emit (inclusive)
//! E   — edge count
//! E × (from, to) pairs, each endpoint in 1..=N
//! ```
//!
//! A completely empty token stream is not an error: [`Manifest::parse`]
//! returns `Ok(None)` and the caller performs no work. A stream that ends
//! anywhere after the first token is [`ManifestError::InputExhausted`].
//!
//! Truck count and the lo/hi range are deliberately **not** validated here.
//! They are preconditions of the assignment step
//! ([`crate::assign::TruckPlan`]), so callers that build networks
//! programmatically hit the same checks as callers going through a manifest.

use crate::graph::NodeId;

/// Errors from manifest parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    /// The token stream ended before a required token.
    #[error("input ended before {expected}")]
    InputExhausted { expected: &'static str },

    /// A token was present but not an integer.
    #[error("token {token:?} is not an integer ({expected})")]
    InvalidToken { token: String, expected: &'static str },

    /// A count token (node or edge count) is negative or absurdly large.
    #[error("{what} {got} is not a valid count")]
    InvalidCount { what: &'static str, got: i64 },

    /// An edge endpoint falls outside `1..=N`.
    #[error("edge endpoint {endpoint} outside 1..={nodes}")]
    EdgeOutOfRange { endpoint: i64, nodes: NodeId },
}

/// A fully parsed input manifest.
///
/// `trucks` and `truck_range` are kept as raw signed integers; the
/// assignment step rejects non-positive truck counts and out-of-bounds
/// ranges with typed errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Node count `N`; nodes are identified by `1..=N`.
    pub nodes: NodeId,
    /// Requested truck count `B` (unvalidated, may be non-positive).
    pub trucks: i64,
    /// Requested inclusive output range `(lo, hi)` (unvalidated).
    pub truck_range: (i64, i64),
    /// Directed edges in input order. Duplicates are preserved: parallel
    /// edges each contribute to path counts.
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Manifest {
    /// Parse a manifest from a whitespace-separated token stream.
    ///
    /// Returns `Ok(None)` when `input` contains no tokens at all.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`] when the stream ends early, a token is
    /// not an integer, a count is invalid, or an edge endpoint is out of
    /// range.
    pub fn parse(input: &str) -> Result<Option<Self>, ManifestError> {
        let mut tokens = input.split_whitespace();

        // The very first token is the only one allowed to be absent.
        let Some(first) = tokens.next() else {
            return Ok(None);
        };

        let nodes = parse_count(first, "node count")?;
        let trucks = next_int(&mut tokens, "truck count")?;
        let lo = next_int(&mut tokens, "truck range start")?;
        let hi = next_int(&mut tokens, "truck range end")?;

        let edge_count_tok = next_token(&mut tokens, "edge count")?;
        let edge_count = parse_count(edge_count_tok, "edge count")?;

        let mut edges = Vec::with_capacity(edge_count as usize);
        for _ in 0..edge_count {
            let from = next_endpoint(&mut tokens, nodes, "edge source")?;
            let to = next_endpoint(&mut tokens, nodes, "edge destination")?;
            edges.push((from, to));
        }

        Ok(Some(Self {
            nodes,
            trucks,
            truck_range: (lo, hi),
            edges,
        }))
    }
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<&'a str, ManifestError> {
    tokens
        .next()
        .ok_or(ManifestError::InputExhausted { expected })
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<i64, ManifestError> {
    let token = next_token(tokens, expected)?;
    parse_int(token, expected)
}

fn parse_int(token: &str, expected: &'static str) -> Result<i64, ManifestError> {
    token.parse().map_err(|_| ManifestError::InvalidToken {
        token: token.to_string(),
        expected,
    })
}

/// Parse a non-negative count token into a `NodeId`-sized integer.
fn parse_count(token: &str, what: &'static str) -> Result<NodeId, ManifestError> {
    let raw = parse_int(token, what)?;
    NodeId::try_from(raw).map_err(|_| ManifestError::InvalidCount { what, got: raw })
}

fn next_endpoint<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    nodes: NodeId,
    expected: &'static str,
) -> Result<NodeId, ManifestError> {
    let raw = next_int(tokens, expected)?;
    match NodeId::try_from(raw) {
        Ok(id) if (1..=nodes).contains(&id) => Ok(id),
        _ => Err(ManifestError::EdgeOutOfRange {
            endpoint: raw,
            nodes,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_not_an_error() {
        assert_eq!(Manifest::parse(""), Ok(None));
        assert_eq!(Manifest::parse("   \n\t  "), Ok(None));
    }

    #[test]
    fn full_manifest_parses() {
        let parsed = Manifest::parse("3 2 1 2 2\n1 2\n2 3")
            .expect("parse")
            .expect("non-empty");
        assert_eq!(parsed.nodes, 3);
        assert_eq!(parsed.trucks, 2);
        assert_eq!(parsed.truck_range, (1, 2));
        assert_eq!(parsed.edges, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn duplicate_edges_are_preserved() {
        let parsed = Manifest::parse("2 1 1 1 2 1 2 1 2")
            .expect("parse")
            .expect("non-empty");
        assert_eq!(parsed.edges, vec![(1, 2), (1, 2)]);
    }

    #[test]
    fn truncated_input_is_exhaustion() {
        let err = Manifest::parse("3 2 1").expect_err("must fail");
        assert_eq!(
            err,
            ManifestError::InputExhausted {
                expected: "truck range end"
            }
        );
    }

    #[test]
    fn missing_edge_pair_is_exhaustion() {
        // Two edges declared, only one supplied.
        let err = Manifest::parse("3 2 1 2 2 1 2").expect_err("must fail");
        assert_eq!(
            err,
            ManifestError::InputExhausted {
                expected: "edge source"
            }
        );
    }

    #[test]
    fn non_integer_token_rejected() {
        let err = Manifest::parse("3 x 1 2 0").expect_err("must fail");
        assert!(matches!(err, ManifestError::InvalidToken { .. }));
    }

    #[test]
    fn negative_node_count_rejected() {
        let err = Manifest::parse("-1 2 1 2 0").expect_err("must fail");
        assert_eq!(
            err,
            ManifestError::InvalidCount {
                what: "node count",
                got: -1
            }
        );
    }

    #[test]
    fn edge_endpoint_out_of_range_rejected() {
        let err = Manifest::parse("3 2 1 2 1 1 4").expect_err("must fail");
        assert_eq!(
            err,
            ManifestError::EdgeOutOfRange {
                endpoint: 4,
                nodes: 3
            }
        );
    }

    #[test]
    fn negative_trucks_parse_but_are_not_validated_here() {
        // Truck-count validation belongs to the assignment step.
        let parsed = Manifest::parse("2 -5 1 1 0").expect("parse").expect("some");
        assert_eq!(parsed.trucks, -5);
    }
}

/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Errors reported by the network and the flow algorithms.

use thiserror::Error;

/// Error raised while building a network or computing a flow.
///
/// Vertex keys and capacities are rendered with their `Debug`
/// representation, so the error type does not depend on the key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A negative capacity was passed when inserting an edge.
    #[error("invalid capacity {capacity} on edge {src} -> {snk}, must be non-negative")]
    InvalidCapacity { src: String, snk: String, capacity: String },

    /// A terminal vertex is not contained in the network.
    #[error("unknown vertex {0}")]
    UnknownVertex(String),

    /// A derived flow violates its capacity bounds or flow conservation.
    ///
    /// This always indicates a bug in the algorithm and must not be retried.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// The results of a flow computation have been requested before it
    /// converged.
    #[error("the flow computation has not converged")]
    NotConverged,

    /// The computation has been cancelled by the caller.
    #[error("flow computation aborted after {augmentations} augmentations")]
    Aborted { augmentations: usize },

    /// The configured maximal number of augmentations has been reached.
    #[error("augmentation limit of {0} reached before convergence")]
    AugmentationLimit(usize),
}

impl Error {
    pub(crate) fn invalid_capacity<V, F>(src: &V, snk: &V, capacity: F) -> Self
    where
        V: std::fmt::Debug,
        F: std::fmt::Debug,
    {
        Error::InvalidCapacity {
            src: format!("{:?}", src),
            snk: format!("{:?}", snk),
            capacity: format!("{:?}", capacity),
        }
    }

    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(u: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", u))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_messages() {
        let err = Error::invalid_capacity(&'a', &'b', -3);
        assert_eq!(
            err.to_string(),
            "invalid capacity -3 on edge 'a' -> 'b', must be non-negative"
        );
        assert_eq!(Error::unknown_vertex(&"x").to_string(), "unknown vertex \"x\"");
        assert_eq!(
            Error::Aborted { augmentations: 4 }.to_string(),
            "flow computation aborted after 4 augmentations"
        );
    }
}

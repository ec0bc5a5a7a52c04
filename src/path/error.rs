// Copyright 2025 yap contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Path parsing and resolution errors

use thiserror::Error;

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;

/// Errors parsing an accessor or resolving it against a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Segment that is not `key([digits])*`
    #[error("malformed path segment '{segment}' in '{path}'")]
    MalformedSegment {
        /// The offending segment
        segment: String,
        /// The whole accessor
        path: String,
    },

    /// A resolver reached a null value
    #[error("cannot resolve '{step}' against null")]
    NullValue {
        /// The resolver step, e.g. `name` or `[2]`
        step: String,
    },

    /// Key lookup on something other than an object
    #[error("cannot look up key '{key}': value is {actual}, not an object")]
    NotAnObject {
        /// Key being looked up
        key: String,
        /// Type of the current value
        actual: &'static str,
    },

    /// Key absent from the current object
    #[error("key '{key}' does not exist")]
    MissingKey {
        /// Key being looked up
        key: String,
    },

    /// Index lookup on something other than an array
    #[error("cannot take index {index}: value is {actual}, not an array")]
    NotAnArray {
        /// Index being looked up
        index: usize,
        /// Type of the current value
        actual: &'static str,
    },

    /// Index outside `[0, len)`
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// Index being looked up
        index: usize,
        /// Length of the array
        len: usize,
    },
}

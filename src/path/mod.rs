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

//! JSONPath-style accessor resolution
//!
//! An accessor such as `$.store.book[0].title` is split on `.` into segments.
//! Each segment becomes a key lookup (or the identity step for `$`) followed by
//! one index lookup per `[n]` suffix, so `book[0][1]` is key `book`, index 0,
//! index 1. Resolution threads the current value through every step in order.

mod error;

pub use error::{PathError, PathResult};

use crate::model::Value;
use smallvec::SmallVec;
use std::fmt;

/// Single resolution step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolver {
    /// `$`: the current value itself
    Root,
    /// Object key lookup
    Key(String),
    /// Array index lookup
    Index(usize),
}

impl Resolver {
    /// Apply this step to the current value
    pub fn apply<'v>(&self, current: &'v Value) -> PathResult<&'v Value> {
        if current.is_null() {
            return Err(PathError::NullValue {
                step: self.to_string(),
            });
        }

        match self {
            Resolver::Root => Ok(current),
            Resolver::Key(key) => match current {
                Value::Object(map) => map
                    .get(key)
                    .ok_or_else(|| PathError::MissingKey { key: key.clone() }),
                other => Err(PathError::NotAnObject {
                    key: key.clone(),
                    actual: other.type_name(),
                }),
            },
            Resolver::Index(index) => match current {
                Value::Array(items) => items.get(*index).ok_or(PathError::IndexOutOfBounds {
                    index: *index,
                    len: items.len(),
                }),
                other => Err(PathError::NotAnArray {
                    index: *index,
                    actual: other.type_name(),
                }),
            },
        }
    }
}

impl fmt::Display for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolver::Root => f.write_str("$"),
            Resolver::Key(key) => f.write_str(key),
            Resolver::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// One dot-delimited component of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Segment text as written, e.g. `book[0]`
    pub name: String,
    /// Steps in application order
    pub resolvers: SmallVec<[Resolver; 2]>,
}

impl Segment {
    /// Parse `key([digits])*`
    pub fn parse(text: &str) -> PathResult<Self> {
        Self::parse_in(text, text)
    }

    fn parse_in(text: &str, path: &str) -> PathResult<Self> {
        let malformed = || PathError::MalformedSegment {
            segment: text.to_string(),
            path: path.to_string(),
        };

        let base_end = text.find('[').unwrap_or(text.len());
        let base = &text[..base_end];
        if base.is_empty() || base.contains(']') {
            return Err(malformed());
        }

        let mut resolvers: SmallVec<[Resolver; 2]> = SmallVec::new();
        resolvers.push(match base {
            "$" => Resolver::Root,
            key => Resolver::Key(key.to_string()),
        });

        let mut rest = &text[base_end..];
        while !rest.is_empty() {
            let inner = rest.strip_prefix('[').ok_or_else(malformed)?;
            let close = inner.find(']').ok_or_else(malformed)?;
            let digits = &inner[..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            let index = digits.parse::<usize>().map_err(|_| malformed())?;
            resolvers.push(Resolver::Index(index));
            rest = &inner[close + 1..];
        }

        Ok(Self {
            name: text.to_string(),
            resolvers,
        })
    }
}

/// Parsed accessor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    text: String,
    segments: Vec<Segment>,
}

impl Path {
    /// Parse an accessor string
    pub fn parse(accessor: &str) -> PathResult<Self> {
        let segments = accessor
            .split('.')
            .map(|segment| Segment::parse_in(segment, accessor))
            .collect::<PathResult<Vec<_>>>()?;

        Ok(Self {
            text: accessor.to_string(),
            segments,
        })
    }

    /// Segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Accessor text the path was parsed from
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Resolve the path against a document
    pub fn resolve<'v>(&self, document: &'v Value) -> PathResult<&'v Value> {
        let mut current = document;
        for resolver in self.segments.iter().flat_map(|s| s.resolvers.iter()) {
            log::trace!("resolving step '{resolver}' of '{}'", self.text);
            current = resolver.apply(current)?;
        }
        Ok(current)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse an accessor string into a [`Path`]
pub fn parse_path(accessor: &str) -> PathResult<Path> {
    Path::parse(accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn store() -> Value {
        Value::from_json_str(
            r#"{
                "store": {
                    "book": [
                        {"title": "The Great Gatsby"},
                        {"title": "1984"}
                    ],
                    "grid": [[1, 2], [3, 4]],
                    "missing": null
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_path_segments() {
        let path = parse_path("$.store.book[0].title").unwrap();
        let names: Vec<_> = path.segments().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["$", "store", "book[0]", "title"]);
    }

    #[test]
    fn test_segment_resolvers() {
        let segment = Segment::parse("book[0]").unwrap();
        assert_eq!(segment.name, "book[0]");
        assert_eq!(
            segment.resolvers.as_slice(),
            &[Resolver::Key("book".into()), Resolver::Index(0)]
        );

        let root = Segment::parse("$").unwrap();
        assert_eq!(root.resolvers.as_slice(), &[Resolver::Root]);

        let multi = Segment::parse("grid[1][0]").unwrap();
        assert_eq!(multi.resolvers.len(), 3);
    }

    #[test]
    fn test_resolution() {
        let data = store();
        let path = parse_path("$.store.book[0].title").unwrap();
        assert_eq!(path.resolve(&data).unwrap(), &Value::from("The Great Gatsby"));

        let path = parse_path("store.grid[1][0]").unwrap();
        assert_eq!(path.resolve(&data).unwrap(), &Value::from(3i64));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let data = store();
        let path = parse_path("$.store.book[1]").unwrap();
        let first = path.resolve(&data).unwrap().clone();
        assert_eq!(path.resolve(&data).unwrap(), &first);
        assert_eq!(parse_path("$.store.book[1]").unwrap().resolve(&data).unwrap(), &first);
    }

    #[test]
    fn test_root_alone_is_identity() {
        let data = store();
        assert_eq!(parse_path("$").unwrap().resolve(&data).unwrap(), &data);
    }

    #[test]
    fn test_index_out_of_bounds() {
        let data = Value::from_json_str(r#"{"a": {"b": [1, 2, 3]}}"#).unwrap();
        let err = parse_path("$.a.b[5]").unwrap().resolve(&data).unwrap_err();
        assert_eq!(err, PathError::IndexOutOfBounds { index: 5, len: 3 });
        assert!(err.to_string().contains("index 5"));
    }

    #[rstest]
    #[case("$.store.shelf", PathError::MissingKey { key: "shelf".into() })]
    #[case("$.store.book.title", PathError::NotAnObject { key: "title".into(), actual: "array" })]
    #[case("$.store[0]", PathError::NotAnArray { index: 0, actual: "object" })]
    #[case("$.store.missing.x", PathError::NullValue { step: "x".into() })]
    #[case("$.store.missing[0]", PathError::NullValue { step: "[0]".into() })]
    fn test_resolution_errors(#[case] accessor: &str, #[case] expected: PathError) {
        let data = store();
        assert_eq!(
            parse_path(accessor).unwrap().resolve(&data).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_root_on_null_fails() {
        assert!(matches!(
            parse_path("$").unwrap().resolve(&Value::Null),
            Err(PathError::NullValue { .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("a..b")]
    #[case("a.")]
    #[case("[0]")]
    #[case("a[x]")]
    #[case("a[]")]
    #[case("a[0")]
    #[case("a[0]b")]
    #[case("a]")]
    #[case("a[99999999999999999999999]")]
    fn test_malformed_segments(#[case] accessor: &str) {
        assert!(matches!(
            parse_path(accessor),
            Err(PathError::MalformedSegment { .. })
        ));
    }

    #[test]
    fn test_at_key_lookup() {
        let scope = Value::from_json_str(r#"{"@": {"price": 12}}"#).unwrap();
        assert_eq!(
            parse_path("@.price").unwrap().resolve(&scope).unwrap(),
            &Value::from(12i64)
        );
    }
}

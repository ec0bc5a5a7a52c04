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

//! Function registry for yap
//!
//! Builtins are trait objects looked up by name. There is no process-wide
//! table: every engine owns the registry it was built with.

#![warn(missing_docs)]

pub mod function;
pub mod functions;

pub use function::{BuiltinFunction, FunctionRegistry};
pub use functions::{EqualsFunction, LengthFunction, WhereFunction};

/// Create a registry holding the standard builtins
pub fn create_standard_registry() -> FunctionRegistry {
    let mut functions = FunctionRegistry::new();
    functions::register_builtin_functions(&mut functions);
    functions
}

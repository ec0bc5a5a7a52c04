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

//! Builtin function implementations

pub mod collection;
pub mod comparison;
pub mod filtering;

pub use collection::LengthFunction;
pub use comparison::EqualsFunction;
pub use filtering::WhereFunction;

use super::function::FunctionRegistry;

/// Register every builtin
pub fn register_builtin_functions(registry: &mut FunctionRegistry) {
    comparison::register_comparison_functions(registry);
    collection::register_collection_functions(registry);
    filtering::register_filtering_functions(registry);
}

/*
 * Copyright (c) 2026. Switchboard Contributors
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
use std::any::{type_name, TypeId};
use std::fmt;

/// The process-unique identity of an action type.
///
/// An `ActionId` is derived from an action's concrete type, never from its
/// value: every instance of the same action type shares one identity. The
/// identity is stable for the lifetime of the process and distinct for
/// distinct types because it wraps [`TypeId`], which the compiler guarantees
/// to be collision-free. The type name rides along for log and panic
/// messages only; equality and hashing use the `TypeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId {
    type_id: TypeId,
    name: &'static str,
}

impl ActionId {
    /// Derives the identity of the action type `A`. Cannot fail.
    pub fn of<A: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<A>(),
            name: type_name::<A>(),
        }
    }

    /// The fully-qualified name of the action type, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greet;
    struct Farewell;

    #[test]
    fn same_type_yields_same_identity() {
        assert_eq!(ActionId::of::<Greet>(), ActionId::of::<Greet>());
    }

    #[test]
    fn distinct_types_yield_distinct_identities() {
        assert_ne!(ActionId::of::<Greet>(), ActionId::of::<Farewell>());
    }

    #[test]
    fn display_shows_the_type_name() {
        let id = ActionId::of::<Greet>();
        assert!(id.to_string().ends_with("Greet"));
        assert_eq!(id.to_string(), id.name());
    }
}

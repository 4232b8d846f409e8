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
use crate::common::ActionId;

/// Represents errors that can occur when dispatching actions.
///
/// Registration-time mistakes (two handlers claiming one action) are wiring
/// errors and panic instead; only dispatch-time lookups surface as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// No live dispatcher holds a handler for the action.
    UnsupportedAction(ActionId),
    /// A handler exists but was registered under the other calling
    /// convention (sync where async was requested, or vice versa).
    ShapeMismatch(ActionId),
    /// The handler dropped its completion callback without invoking it, so
    /// the awaited result can never arrive.
    CompletionDropped(ActionId),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DispatchError::UnsupportedAction(id) => {
                write!(f, "No handler registered for action {}", id)
            }
            DispatchError::ShapeMismatch(id) => write!(
                f,
                "Handler for action {} was registered under the other calling convention",
                id
            ),
            DispatchError::CompletionDropped(id) => write!(
                f,
                "Handler for action {} dropped its completion without calling it",
                id
            ),
        }
    }
}

impl std::error::Error for DispatchError {}

impl DispatchError {
    /// The identity of the action the dispatch failed for.
    pub fn action(&self) -> ActionId {
        match self {
            DispatchError::UnsupportedAction(id)
            | DispatchError::ShapeMismatch(id)
            | DispatchError::CompletionDropped(id) => *id,
        }
    }
}

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

#![forbid(unsafe_code)]

//! Switchboard Core Library
//!
//! This library provides the core functionality for the Switchboard action
//! dispatch bus: action identities, handler tables, and the router that
//! resolves each action type to the single live table handling it.

/// Common utilities and structures used throughout Switchboard.
pub(crate) mod common;

/// Trait definitions used in Switchboard.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports commonly used items from the `common` and `traits`
/// modules.
pub mod prelude {
    pub use crate::common::{ActionId, Completion, DispatchError, Dispatcher, Router};
    pub use crate::traits::{
        Action, ActionHandler, AsyncAction, AsyncActionHandler, GenericAction,
    };
}

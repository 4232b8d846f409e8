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

//! Defines the core traits that establish the contracts of the Switchboard bus.
//!
//! # Key Traits
//!
//! *   [`GenericAction`]: The base contract for all actions. Declares the
//!     parameter and output shapes and derives the action's type identity.
//! *   [`Action`]: Marker for actions whose result returns synchronously,
//!     with the `send()` convenience against the process-wide router.
//! *   [`AsyncAction`]: Marker for actions whose result arrives through a
//!     completion callback, with the `send_async()`/`send_future()`
//!     conveniences.
//! *   [`ActionHandler`] / [`AsyncActionHandler`]: Struct-shaped handlers
//!     bound to one action type, registered via
//!     [`Dispatcher::register_handler`](crate::common::Dispatcher::register_handler).

// --- Public Re-exports ---
pub use action::Action;
pub use action_handler::{ActionHandler, AsyncActionHandler};
pub use async_action::AsyncAction;
pub use generic_action::GenericAction;

// --- Submodules ---

/// Defines the [`Action`] marker trait and its dispatch convenience.
mod action;
/// Defines the struct-shaped handler traits.
mod action_handler;
/// Defines the [`AsyncAction`] marker trait and its dispatch conveniences.
mod async_action;
/// Defines the [`GenericAction`] base trait.
mod generic_action;

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

//! Defines common internal type aliases and handler storage used within
//! `switchboard-core`.
//!
//! This module centralizes the type-erased handler representation so that
//! [`Dispatcher`](crate::common::Dispatcher) can store synchronous and
//! asynchronous handlers for arbitrary action types in one map.

use std::any::Any;
use std::sync::Arc;

use crate::traits::GenericAction;

/// The completion callback handed to an asynchronous handler.
///
/// The registered handler must invoke it exactly once with the action's
/// result; it may do so from any thread, before or after the dispatch call
/// returns. The bus does not enforce that it ever fires.
pub type Completion<R> = Box<dyn FnOnce(R) + Send + 'static>;

/// Crate-internal: the concrete shape of a stored synchronous handler for
/// action `A` (parameter in, result out, on the caller's thread).
pub(crate) type SyncHandlerFn<A> = Box<
    dyn Fn(<A as GenericAction>::Param) -> <A as GenericAction>::Output + Send + Sync + 'static,
>;

/// Crate-internal: the concrete shape of a stored asynchronous handler for
/// action `A` (parameter and completion in, nothing out).
pub(crate) type AsyncHandlerFn<A> = Box<
    dyn Fn(<A as GenericAction>::Param, Completion<<A as GenericAction>::Output>)
        + Send
        + Sync
        + 'static,
>;

/// Crate-internal: a type-erased handler entry, tagged by calling convention.
///
/// The payload is an `Arc<dyn Any>` wrapping the concrete [`SyncHandlerFn`]
/// or [`AsyncHandlerFn`] for one action type. The tag is checked first at
/// invocation time, then the payload is recovered by downcast; a failed
/// downcast is reported, never assumed away. The `Arc` lets dispatch clone
/// the entry out of the map and call the handler without holding any lock.
pub(crate) enum HandlerSlot {
    /// A handler invoked as parameter -> result.
    Sync(Arc<dyn Any + Send + Sync>),
    /// A handler invoked as (parameter, completion) -> nothing.
    Async(Arc<dyn Any + Send + Sync>),
}

impl HandlerSlot {
    /// The calling convention this entry was registered under, for logs.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            HandlerSlot::Sync(_) => "sync",
            HandlerSlot::Async(_) => "async",
        }
    }
}

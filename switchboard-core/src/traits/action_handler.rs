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
use crate::common::Completion;
use crate::traits::{Action, AsyncAction, GenericAction};

/// A struct-shaped synchronous handler bound to one action type.
///
/// An alternative to closure registration for handlers that carry state of
/// their own; registered via
/// [`Dispatcher::register_handler`](crate::common::Dispatcher::register_handler).
pub trait ActionHandler: Send + Sync + 'static {
    /// The action type this handler serves.
    type Act: Action;

    /// Handles one dispatch of the bound action.
    fn handle(&self, param: <Self::Act as GenericAction>::Param) -> <Self::Act as GenericAction>::Output;
}

/// A struct-shaped asynchronous handler bound to one action type.
///
/// Registered via
/// [`Dispatcher::register_async_handler`](crate::common::Dispatcher::register_async_handler).
/// The handler must eventually invoke `completion` exactly once.
pub trait AsyncActionHandler: Send + Sync + 'static {
    /// The action type this handler serves.
    type Act: AsyncAction;

    /// Handles one dispatch of the bound action.
    fn handle(
        &self,
        param: <Self::Act as GenericAction>::Param,
        completion: Completion<<Self::Act as GenericAction>::Output>,
    );
}

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

/// The base contract shared by synchronous and asynchronous actions.
///
/// An action is an immutable value describing one request: it declares the
/// parameter shape its handler receives and the output shape the handler
/// produces, and it is consumed once per dispatch. Its identity is its
/// concrete type, never its contents — see [`ActionId`].
///
/// Types rarely implement this directly; the `#[action]` and
/// `#[async_action]` attribute macros generate the implementation with
/// `Param = Self`, so the handler receives the action value itself.
pub trait GenericAction: Send + 'static {
    /// The payload handed to the handler.
    type Param: Send + 'static;

    /// The result the handler produces (or eventually delivers).
    type Output: Send + 'static;

    /// Consumes the action, yielding the handler's parameter.
    fn into_param(self) -> Self::Param;

    /// The process-unique identity of this action type.
    fn id() -> ActionId
    where
        Self: Sized,
    {
        ActionId::of::<Self>()
    }
}

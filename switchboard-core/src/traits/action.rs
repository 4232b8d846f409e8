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
use crate::common::{DispatchError, Router};
use crate::traits::GenericAction;

/// Marker for actions whose result returns synchronously on the caller's
/// thread.
pub trait Action: GenericAction {
    /// Dispatches this action through the process-wide router and returns
    /// the handler's result.
    ///
    /// Equivalent to `Router::global().send(self)`; use
    /// [`Router::send`] directly to target an explicit router.
    fn send(self) -> Result<Self::Output, DispatchError>
    where
        Self: Sized,
    {
        Router::global().send(self)
    }
}

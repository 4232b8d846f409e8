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
use std::future::Future;

use tokio::sync::oneshot;

use crate::common::{DispatchError, Router};
use crate::traits::GenericAction;

/// Marker for actions whose result arrives through a completion callback.
///
/// The bus invokes the registered handler on the calling thread and returns;
/// the handler delivers the result whenever and wherever it chooses. Callers
/// must not assume the completion fires on the dispatching thread.
pub trait AsyncAction: GenericAction {
    /// Dispatches this action through the process-wide router. `completion`
    /// receives exactly the value the handler produces, unmodified, possibly
    /// after this call has returned.
    fn send_async(
        self,
        completion: impl FnOnce(Self::Output) + Send + 'static,
    ) -> Result<(), DispatchError>
    where
        Self: Sized,
    {
        Router::global().send_async(self, completion)
    }

    /// Dispatches this action and exposes the completion as a future.
    ///
    /// Bridges the callback convention onto a [`oneshot`] channel so async
    /// call sites can `.await` the result. A handler that drops its
    /// completion without firing resolves the future to
    /// [`DispatchError::CompletionDropped`] rather than pending forever.
    fn send_future(self) -> impl Future<Output = Result<Self::Output, DispatchError>> + Send
    where
        Self: Sized,
    {
        let id = Self::id();
        let (tx, rx) = oneshot::channel();
        let issued = Router::global().send_async(self, move |value| {
            // The caller may have stopped awaiting; delivery is best-effort.
            let _ = tx.send(value);
        });
        async move {
            issued?;
            rx.await.map_err(|_| DispatchError::CompletionDropped(id))
        }
    }
}

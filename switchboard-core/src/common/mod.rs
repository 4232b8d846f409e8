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
pub use action_id::ActionId;
pub use dispatch_error::DispatchError;
pub use dispatcher::Dispatcher;
pub(crate) use dispatcher::DispatcherInner;
pub use router::Router;
pub use types::Completion;
pub(crate) use types::{AsyncHandlerFn, HandlerSlot, SyncHandlerFn};

mod action_id;
mod dispatch_error;
mod dispatcher;
mod router;
mod types;

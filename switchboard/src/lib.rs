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
#![forbid(missing_docs)]

//! # Switchboard
//!
//! An in-process action dispatch bus. A module declares which strongly-typed
//! actions it handles by registering them into its own
//! [`Dispatcher`](prelude::Dispatcher); call
//! sites construct an action value and send it, and the bus routes the call
//! to the one handler bound to that action's type. Modules never import each
//! other — the action type is the whole contract.
//!
//! ## Key Concepts
//!
//! - **Actions**: Plain structs declared with [`action`](prelude::action) /
//!   [`async_action`](prelude::async_action)
//!   (or manual [`GenericAction`](prelude::GenericAction) impls), carrying a
//!   parameter and a declared output shape. An action's identity is its type.
//! - **Dispatchers**: Handler tables owned by the registering module. Each
//!   action type has at most one handler across every live, routing-enabled
//!   dispatcher in the process.
//! - **Router**: The process-wide directory that resolves an action type to
//!   the live dispatcher claiming it. It holds dispatchers weakly, so a
//!   dropped dispatcher's claims vanish on their own.
//! - **Calling conventions**: Synchronous actions return their result on the
//!   caller's thread; asynchronous actions deliver it through a completion
//!   callback (or a future, via `send_future`).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchboard::prelude::*;
//!
//! #[action(output = String)]
//! struct Greet {
//!     name: String,
//! }
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.register::<Greet>(|greet| format!("Hello, {}", greet.name));
//!
//! let greeting = Greet { name: "Ann".into() }.send()?;
//! assert_eq!(greeting, "Hello, Ann");
//! ```

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of `switchboard-core` together with the
/// action declaration macros.
pub mod prelude {
    pub use switchboard_core::prelude::*;
    pub use switchboard_macro::{action, async_action};
}

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
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::*;

use crate::common::{
    ActionId, AsyncHandlerFn, Completion, DispatchError, HandlerSlot, Router, SyncHandlerFn,
};
use crate::traits::{Action, ActionHandler, AsyncAction, AsyncActionHandler, GenericAction};

/// A handler table binding each action type to exactly one handler.
///
/// A module constructs its own `Dispatcher`, registers the actions it is
/// responsible for, and keeps the dispatcher alive for as long as it wants to
/// serve them. [`Dispatcher::new`] produces a routing-enabled table that
/// announces itself to the process-wide [`Router`], making its actions
/// reachable through [`Router::send`] and the `send()`/`send_async()` trait
/// conveniences. [`Dispatcher::local`] produces a private table that only
/// answers direct [`handle`](Dispatcher::handle) calls.
///
/// The router holds the table by weak reference: dropping the last clone of a
/// `Dispatcher` releases every action it claimed, with no unregistration
/// step.
///
/// Registering the same action twice, in one table or across two
/// routing-enabled tables on one router, is a wiring error and panics: two
/// modules believing they own the same action is a build-time mistake, not a
/// runtime condition to recover from.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
    router: Option<Router>,
}

/// Crate-internal: the shared state the router observes through a `Weak`.
pub(crate) struct DispatcherInner {
    handlers: DashMap<ActionId, HandlerSlot>,
    routing_enabled: bool,
}

impl Dispatcher {
    /// Creates a routing-enabled dispatcher registered with the process-wide
    /// router.
    pub fn new() -> Self {
        Self::with_router(Router::global())
    }

    /// Creates a routing-enabled dispatcher registered with an explicit
    /// router instance.
    pub fn with_router(router: &Router) -> Self {
        let dispatcher = Self {
            inner: Arc::new(DispatcherInner {
                handlers: DashMap::new(),
                routing_enabled: true,
            }),
            router: Some(router.clone()),
        };
        router.add(&dispatcher);
        dispatcher
    }

    /// Creates a private dispatcher that never participates in routing.
    ///
    /// Its actions are reachable only through [`handle`](Dispatcher::handle)
    /// and [`handle_async`](Dispatcher::handle_async) on the dispatcher
    /// itself, and its claims are invisible to every router.
    pub fn local() -> Self {
        Self {
            inner: Arc::new(DispatcherInner {
                handlers: DashMap::new(),
                routing_enabled: false,
            }),
            router: None,
        }
    }

    /// Binds a synchronous handler to the action type `A`.
    ///
    /// # Panics
    /// Panics if `A` is already registered in this dispatcher, or if this
    /// dispatcher is routing-enabled and another live dispatcher on the same
    /// router already claims `A`.
    #[instrument(skip(self, handler), level = "debug")]
    pub fn register<A>(&self, handler: impl Fn(A::Param) -> A::Output + Send + Sync + 'static) -> &Self
    where
        A: Action,
    {
        let id = A::id();
        let handler_box: SyncHandlerFn<A> = Box::new(handler);
        trace!(action = %id, kind = "sync", "Adding action handler");
        self.install(id, HandlerSlot::Sync(Arc::new(handler_box)));
        self
    }

    /// Binds an asynchronous handler to the action type `A`.
    ///
    /// The handler receives the action's parameter and a completion callback
    /// it must eventually invoke exactly once with the result, from whichever
    /// thread it chooses. The bus imposes no timeout on the completion.
    ///
    /// # Panics
    /// Same duplicate-registration rules as [`register`](Dispatcher::register).
    #[instrument(skip(self, handler), level = "debug")]
    pub fn register_async<A>(
        &self,
        handler: impl Fn(A::Param, Completion<A::Output>) + Send + Sync + 'static,
    ) -> &Self
    where
        A: AsyncAction,
    {
        let id = A::id();
        let handler_box: AsyncHandlerFn<A> = Box::new(handler);
        trace!(action = %id, kind = "async", "Adding action handler");
        self.install(id, HandlerSlot::Async(Arc::new(handler_box)));
        self
    }

    /// Binds a struct-shaped synchronous handler to its declared action type.
    pub fn register_handler<H>(&self, handler: H) -> &Self
    where
        H: ActionHandler,
    {
        self.register::<H::Act>(move |param| handler.handle(param))
    }

    /// Binds a struct-shaped asynchronous handler to its declared action type.
    pub fn register_async_handler<H>(&self, handler: H) -> &Self
    where
        H: AsyncActionHandler,
    {
        self.register_async::<H::Act>(move |param, completion| handler.handle(param, completion))
    }

    /// Invokes the handler registered for `action`'s type and returns its
    /// result synchronously, on the caller's thread.
    pub fn handle<A>(&self, action: A) -> Result<A::Output, DispatchError>
    where
        A: Action,
    {
        self.inner.handle(action)
    }

    /// Invokes the asynchronous handler registered for `action`'s type.
    ///
    /// Returns once the handler call has been issued; the result arrives
    /// later through `completion`, possibly on another thread.
    pub fn handle_async<A>(
        &self,
        action: A,
        completion: impl FnOnce(A::Output) + Send + 'static,
    ) -> Result<(), DispatchError>
    where
        A: AsyncAction,
    {
        self.inner.handle_async(action, Box::new(completion))
    }

    /// True iff this dispatcher holds a handler for the action type `A`.
    pub fn supports<A>(&self) -> bool
    where
        A: GenericAction,
    {
        self.inner.supports_id(A::id())
    }

    /// True iff this dispatcher holds a handler for the given identity.
    pub fn supports_id(&self, id: ActionId) -> bool {
        self.inner.supports_id(id)
    }

    /// The identities of every action this dispatcher currently claims.
    pub fn action_ids(&self) -> Vec<ActionId> {
        self.inner.action_ids()
    }

    /// Whether this dispatcher participates in router resolution.
    pub fn routing_enabled(&self) -> bool {
        self.inner.routing_enabled
    }

    pub(crate) fn inner(&self) -> &Arc<DispatcherInner> {
        &self.inner
    }

    /// Records a handler under the one-handler-per-action invariant.
    ///
    /// The in-table duplicate check and the insertion are a single map
    /// `entry` operation, and for routing-enabled dispatchers the router
    /// serializes the cross-table claim check with the insertion, so two
    /// registrations racing on one action can never both land.
    fn install(&self, id: ActionId, slot: HandlerSlot) {
        match &self.router {
            Some(router) => router.install(id, &self.inner, slot),
            None => self.inner.install(id, slot),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("routing_enabled", &self.inner.routing_enabled)
            .field("actions", &self.inner.action_ids())
            .finish()
    }
}

impl DispatcherInner {
    pub(crate) fn supports_id(&self, id: ActionId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Inserts a slot, panicking if the identity is already taken. The entry
    /// guard makes the duplicate check and the insertion one atomic step.
    pub(crate) fn install(&self, id: ActionId, slot: HandlerSlot) {
        match self.handlers.entry(id) {
            Entry::Occupied(_) => {
                error!(action = %id, "action registered twice in the same dispatcher");
                panic!("Doubled action {id}: it is already registered in this dispatcher");
            }
            Entry::Vacant(vacant) => {
                vacant.insert(slot);
            }
        }
    }

    pub(crate) fn action_ids(&self) -> Vec<ActionId> {
        self.handlers.iter().map(|entry| *entry.key()).collect()
    }

    pub(crate) fn handle<A>(&self, action: A) -> Result<A::Output, DispatchError>
    where
        A: Action,
    {
        let id = A::id();
        let erased = match self.handlers.get(&id) {
            None => return Err(DispatchError::UnsupportedAction(id)),
            Some(entry) => match entry.value() {
                HandlerSlot::Sync(erased) => Arc::clone(erased),
                other => {
                    debug!(action = %id, stored = other.kind(), "sync dispatch hit an async entry");
                    return Err(DispatchError::ShapeMismatch(id));
                }
            },
        };
        // Entry guard is released here; the handler runs without any lock held.
        let Some(handler) = erased.downcast_ref::<SyncHandlerFn<A>>() else {
            error!(action = %id, "stored handler failed to downcast to its recorded shape");
            return Err(DispatchError::ShapeMismatch(id));
        };
        trace!(action = %id, "invoking sync handler");
        Ok(handler(action.into_param()))
    }

    pub(crate) fn handle_async<A>(
        &self,
        action: A,
        completion: Completion<A::Output>,
    ) -> Result<(), DispatchError>
    where
        A: AsyncAction,
    {
        let id = A::id();
        let erased = match self.handlers.get(&id) {
            None => return Err(DispatchError::UnsupportedAction(id)),
            Some(entry) => match entry.value() {
                HandlerSlot::Async(erased) => Arc::clone(erased),
                other => {
                    debug!(action = %id, stored = other.kind(), "async dispatch hit a sync entry");
                    return Err(DispatchError::ShapeMismatch(id));
                }
            },
        };
        let Some(handler) = erased.downcast_ref::<AsyncHandlerFn<A>>() else {
            error!(action = %id, "stored handler failed to downcast to its recorded shape");
            return Err(DispatchError::ShapeMismatch(id));
        };
        trace!(action = %id, "invoking async handler");
        handler(action.into_param(), completion);
        Ok(())
    }
}

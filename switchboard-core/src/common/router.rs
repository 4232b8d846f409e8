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
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use dashmap::DashMap;
use lazy_static::lazy_static;
use static_assertions::assert_impl_all;
use tracing::*;

use crate::common::{ActionId, DispatchError, Dispatcher, DispatcherInner, HandlerSlot};
use crate::traits::{Action, AsyncAction};

lazy_static! {
    static ref GLOBAL_ROUTER: Router = Router::default();
}

/// The directory of live, routing-enabled dispatchers.
///
/// A router observes its members through `Weak` references, so membership is
/// entirely non-owning: dropping a [`Dispatcher`] makes its claims vanish on
/// the next query with no explicit cleanup, and its action identities become
/// immediately available for re-registration. Across one router, every
/// action identity is claimed by at most one live member at any instant.
///
/// `Router` is also the dispatch facade: [`send`](Router::send) and
/// [`send_async`](Router::send_async) resolve an action's owning dispatcher
/// and perform the call, which keeps call sites decoupled from whichever
/// module happens to own the action.
///
/// Most code uses the lazily-initialized process-wide instance behind
/// [`Router::global`] (also reachable through the `send()`/`send_async()`
/// trait conveniences); tests and embedded setups can construct their own
/// routers and wire dispatchers to them with [`Dispatcher::with_router`].
#[derive(Clone, Default)]
pub struct Router {
    /// Live members, keyed by the address of their shared inner state.
    members: Arc<DashMap<usize, Weak<DispatcherInner>>>,
    /// Serializes registrations across members, so the cross-table claim
    /// check and the handler insertion happen as one step.
    registration: Arc<Mutex<()>>,
}

assert_impl_all!(Router: Send, Sync);

impl Router {
    /// The process-wide router. Initialized lazily on first use, never torn
    /// down.
    pub fn global() -> &'static Router {
        &GLOBAL_ROUTER
    }

    /// Adds a dispatcher to the directory.
    ///
    /// # Panics
    /// Panics if any action the incoming dispatcher already claims is also
    /// claimed by a live member. Dispatchers normally join empty (at
    /// construction, before registration), in which case the per-registration
    /// check in [`Dispatcher::register`] carries the invariant instead.
    pub(crate) fn add(&self, dispatcher: &Dispatcher) {
        let inner = dispatcher.inner();
        let _registrations = self.lock_registrations();
        for id in inner.action_ids() {
            if self.claimed_elsewhere(id, inner) {
                error!(action = %id, "doubled action claim at router registration");
                panic!(
                    "Doubled action {id}: the same action cannot be handled by two different dispatchers"
                );
            }
        }
        self.members
            .insert(Arc::as_ptr(inner) as usize, Arc::downgrade(inner));
        self.prune();
        debug!(members = self.members.len(), "dispatcher joined router");
    }

    /// Records a handler in `me` under the at-most-one-claimant invariant.
    ///
    /// The registration lock spans the cross-table claim check and the
    /// insertion, so two members racing to claim one action serialize here
    /// and the loser panics instead of silently replacing the winner's
    /// entry.
    ///
    /// # Panics
    /// Panics if `id` is claimed by a live member other than `me`, or already
    /// registered in `me` itself.
    pub(crate) fn install(&self, id: ActionId, me: &Arc<DispatcherInner>, slot: HandlerSlot) {
        let _registrations = self.lock_registrations();
        if self.claimed_elsewhere(id, me) {
            error!(action = %id, "action already claimed by another live dispatcher");
            panic!(
                "Doubled action {id}: the same action cannot be handled by two different dispatchers"
            );
        }
        me.install(id, slot);
    }

    /// True iff some live member claims the given identity.
    pub fn contains(&self, id: ActionId) -> bool {
        self.prune();
        self.live().any(|member| member.supports_id(id))
    }

    /// The unique live member claiming the given identity, if any.
    pub(crate) fn resolve(&self, id: ActionId) -> Option<Arc<DispatcherInner>> {
        self.prune();
        self.live().find(|member| member.supports_id(id))
    }

    /// Dispatches a synchronous action to the live dispatcher claiming its
    /// type, returning the handler's result on the caller's thread.
    pub fn send<A>(&self, action: A) -> Result<A::Output, DispatchError>
    where
        A: Action,
    {
        let id = A::id();
        match self.resolve(id) {
            Some(member) => member.handle(action),
            None => {
                debug!(action = %id, "no live dispatcher claims action");
                Err(DispatchError::UnsupportedAction(id))
            }
        }
    }

    /// Dispatches an asynchronous action to the live dispatcher claiming its
    /// type. Returns once the handler call has been issued; the result is
    /// delivered through `completion` exactly as the handler produced it,
    /// possibly on another thread and after this call has returned.
    pub fn send_async<A>(
        &self,
        action: A,
        completion: impl FnOnce(A::Output) + Send + 'static,
    ) -> Result<(), DispatchError>
    where
        A: AsyncAction,
    {
        let id = A::id();
        match self.resolve(id) {
            Some(member) => member.handle_async(action, Box::new(completion)),
            None => {
                debug!(action = %id, "no live dispatcher claims action");
                Err(DispatchError::UnsupportedAction(id))
            }
        }
    }

    /// True iff `id` is claimed by a live member other than `me`.
    pub(crate) fn claimed_elsewhere(&self, id: ActionId, me: &Arc<DispatcherInner>) -> bool {
        self.live()
            .any(|member| !Arc::ptr_eq(&member, me) && member.supports_id(id))
    }

    fn live(&self) -> impl Iterator<Item = Arc<DispatcherInner>> + '_ {
        self.members.iter().filter_map(|entry| entry.value().upgrade())
    }

    /// Drops directory entries whose dispatcher has been dropped. Stale
    /// entries are already invisible to queries; this reclaims their slots.
    fn prune(&self) {
        self.members.retain(|_, member| member.strong_count() > 0);
    }

    /// A poisoned lock means an earlier registration panicked on a doubled
    /// action; the claim state itself stays consistent, so keep going.
    fn lock_registrations(&self) -> MutexGuard<'_, ()> {
        self.registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let actions: Vec<ActionId> = self.live().flat_map(|member| member.action_ids()).collect();
        f.debug_struct("Router").field("actions", &actions).finish()
    }
}

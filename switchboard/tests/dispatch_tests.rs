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

#![allow(dead_code, unused_doc_comments)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use switchboard::prelude::*;

use crate::setup::{
    actions::{Greet, Refresh, Shout},
    initialize_tracing,
};

mod setup;

/// Tests the basic register-then-send round trip for a synchronous action.
///
/// **Scenario:**
/// 1. Wire a dispatcher to a fresh router.
/// 2. Register a `Greet` handler producing `"Hello, <name>"`.
/// 3. Send `Greet { name: "Ann" }` through the router.
///
/// **Verification:**
/// - `supports` and `contains` report the claim.
/// - The handler runs exactly once and its result comes back unmodified.
#[test]
fn greet_round_trip() -> anyhow::Result<()> {
    initialize_tracing();
    let router = Router::default();
    let dispatcher = Dispatcher::with_router(&router);

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    dispatcher.register::<Greet>(move |greet| {
        seen.fetch_add(1, Ordering::SeqCst);
        format!("Hello, {}", greet.name)
    });

    assert!(dispatcher.supports::<Greet>());
    assert!(router.contains(Greet::id()));

    let greeting = router.send(Greet { name: "Ann".into() })?;
    assert_eq!(greeting, "Hello, Ann");
    assert_eq!(calls.load(Ordering::SeqCst), 1, "handler must run exactly once");
    Ok(())
}

/// Sending an action no dispatcher claims must surface `UnsupportedAction`,
/// never a silent default.
#[test]
fn unregistered_action_errors() {
    initialize_tracing();
    let router = Router::default();

    let err = router.send(Greet { name: "Ann".into() }).unwrap_err();
    assert_eq!(err, DispatchError::UnsupportedAction(Greet::id()));
    assert_eq!(err.action().name(), Greet::id().name());
}

/// `supports` is a non-fatal probe: false before registration, true after,
/// and querying it never disturbs the table.
#[test]
fn supports_probes_without_side_effects() {
    initialize_tracing();
    let dispatcher = Dispatcher::local();

    assert!(!dispatcher.supports::<Refresh>());
    dispatcher.register::<Refresh>(|_| ());
    assert!(dispatcher.supports::<Refresh>());
    assert!(dispatcher.supports::<Refresh>());
    assert_eq!(dispatcher.action_ids(), vec![Refresh::id()]);
}

/// A unit action declared without `output` dispatches as `()`.
#[test]
fn unit_output_action_dispatches() -> anyhow::Result<()> {
    initialize_tracing();
    let router = Router::default();
    let dispatcher = Dispatcher::with_router(&router);

    let fired = Arc::new(AtomicUsize::new(0));
    let seen = fired.clone();
    dispatcher.register::<Refresh>(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    router.send(Refresh)?;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    Ok(())
}

/// A hand-implemented action may declare a parameter narrower than the
/// action value; `into_param` shapes what the handler receives.
#[test]
fn manual_action_narrows_its_parameter() -> anyhow::Result<()> {
    initialize_tracing();
    let router = Router::default();
    let dispatcher = Dispatcher::with_router(&router);
    dispatcher.register::<Shout>(|text| text.to_uppercase());

    let shouted = router.send(Shout {
        text: "hey".into(),
        volume: 2,
    })?;
    assert_eq!(shouted, "HEYHEY");
    Ok(())
}

/// Tests struct-shaped handler registration.
///
/// **Scenario:** a handler carrying its own state (a greeting prefix)
/// implements `ActionHandler` and is registered via `register_handler`.
///
/// **Verification:** dispatch reaches the struct's `handle` and uses its
/// state.
#[test]
fn struct_handler_round_trip() -> anyhow::Result<()> {
    initialize_tracing();

    struct Greeter {
        prefix: &'static str,
    }

    impl ActionHandler for Greeter {
        type Act = Greet;

        fn handle(&self, greet: Greet) -> String {
            format!("{}, {}", self.prefix, greet.name)
        }
    }

    let router = Router::default();
    let dispatcher = Dispatcher::with_router(&router);
    dispatcher.register_handler(Greeter { prefix: "Howdy" });

    let greeting = router.send(Greet { name: "Ann".into() })?;
    assert_eq!(greeting, "Howdy, Ann");
    Ok(())
}

/// Registering the same action twice in one dispatcher is a wiring error
/// and must panic before any dispatch traffic.
#[test]
#[should_panic(expected = "Doubled action")]
fn duplicate_registration_in_one_dispatcher_panics() {
    initialize_tracing();
    let dispatcher = Dispatcher::local();
    dispatcher.register::<Greet>(|greet| greet.name.clone());
    dispatcher.register::<Greet>(|greet| greet.name);
}

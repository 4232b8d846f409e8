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

use switchboard::prelude::*;

// actions are plain structs; the macro declares the output shape
#[action(output = String)]
struct Greet {
    name: String,
}

// or declare everything by hand when the handler should receive a
// narrower parameter than the whole action value
struct WordCount {
    text: String,
}

impl GenericAction for WordCount {
    type Param = String;
    type Output = usize;

    fn into_param(self) -> String {
        self.text
    }
}

impl Action for WordCount {}

fn main() {
    // the module that owns these actions keeps its dispatcher alive;
    // dropping it would release both claims
    let dispatcher = Dispatcher::new();
    dispatcher
        .register::<Greet>(|greet| format!("Hello, {}", greet.name))
        .register::<WordCount>(|text| text.split_whitespace().count());

    // call sites only know the action types, not the handling module
    let greeting = Greet { name: "Ann".into() }.send().expect("Greet is claimed");
    println!("{greeting}");

    let words = WordCount {
        text: "the quick brown fox".into(),
    }
    .send()
    .expect("WordCount is claimed");
    println!("{words} words");

    // probing support is the non-fatal alternative to dispatching blind
    assert!(Router::global().contains(Greet::id()));
}

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

/// Asks for a greeting for one person.
#[action(output = String)]
pub struct Greet {
    pub name: String,
}

/// Looks up a value by key; the handler answers through its completion.
#[async_action(output = usize)]
pub struct FetchValue {
    pub key: String,
}

/// Fire-and-forget refresh request (`output` defaults to `()`).
#[action]
pub struct Refresh;

/// An action declared by hand, with a parameter narrower than the action
/// value itself.
pub struct Shout {
    pub text: String,
    pub volume: u8,
}

impl GenericAction for Shout {
    type Param = String;
    type Output = String;

    fn into_param(self) -> String {
        self.text.repeat(self.volume as usize)
    }
}

impl Action for Shout {}

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

#[async_action(output = usize)]
struct FetchValue {
    key: String,
}

#[tokio::main]
async fn main() {
    let dispatcher = Dispatcher::new();

    // the handler decides where its work runs; the bus only issues the call.
    // here it answers from a worker thread, after send_async has returned
    dispatcher.register_async::<FetchValue>(|fetch, completion| {
        std::thread::spawn(move || {
            completion(fetch.key.len());
        });
    });

    // callback convention: the completion fires on the handler's thread
    let (tx, rx) = std::sync::mpsc::channel();
    FetchValue { key: "abcd".into() }
        .send_async(move |len| {
            tx.send(len).expect("receiver alive");
        })
        .expect("FetchValue is claimed");
    println!("callback delivered: {}", rx.recv().expect("completion fired"));

    // future convention: the same dispatch, awaited
    let len = FetchValue { key: "sixteen".into() }
        .send_future()
        .await
        .expect("FetchValue is claimed");
    println!("future resolved: {len}");
}

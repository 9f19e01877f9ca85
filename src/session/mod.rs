// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interactive session layer
//!
//! Holds the per-session form state that a front end renders, and the
//! clipboard seam it copies through. The core stays stateless; everything
//! mutable lives here.

pub mod clipboard;
pub mod controller;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard};
pub use controller::{Controller, SessionState, COPIED_INDICATOR_MS};

#[cfg(test)]
mod tests;

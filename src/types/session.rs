// Copyright 2026 The flashdeck developers
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

use serde::Serialize;

use crate::types::id::DeckId;
use crate::types::timestamp::Timestamp;

/// The summary of one timed pass through a deck. Produced by the engine
/// exactly once, on completion, and immutable afterwards. The caller owns
/// it; appending it to a session history is the caller's business.
#[derive(Clone, Debug, Serialize)]
pub struct StudySession {
    pub deck_id: DeckId,
    pub started_at: Timestamp,
    /// Set only on completion.
    pub ended_at: Option<Timestamp>,
    /// Number of cards that received an answer.
    pub cards_studied: usize,
    pub correct_answers: usize,
}

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

use crate::study::stopwatch::Millis;
use crate::types::id::CardId;

/// The recorded result of answering one card within a session. Created when
/// the card is graded, never mutated afterward, and discarded with the
/// session; it is not merged back into the stored card.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CardOutcome {
    pub card_id: CardId,
    pub is_correct: bool,
    pub time_spent: Millis,
}

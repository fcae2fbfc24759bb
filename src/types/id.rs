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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;
use uuid::Uuid;

/// Opaque unique identifier for a flashcard.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct CardId(String);

/// Opaque unique identifier for a deck.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct DeckId(String);

impl CardId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl DeckId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for DeckId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

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

use thiserror::Error;

use crate::types::id::DeckId;

pub type Fallible<T> = Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required text field was blank. Recoverable: the operation aborts
    /// with no state change and the caller re-prompts.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// An engine operation was invoked in a sub-state that does not permit
    /// it. A caller contract violation, not a user error.
    #[error("invalid transition: cannot {action} in the {state} state")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("cannot study a deck with no cards")]
    EmptyDeck,
    #[error("no deck with id {0}")]
    UnknownDeck(DeckId),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Per-field validation flags, as the caller renders them next to the
/// corresponding inputs. A field is flagged when it is empty after trimming.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldErrors {
    pub question: bool,
    pub answer: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.question || self.answer
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match (self.question, self.answer) {
            (true, true) => write!(f, "question and answer are required"),
            (true, false) => write!(f, "question is required"),
            (false, true) => write!(f, "answer is required"),
            (false, false) => write!(f, "no blank fields"),
        }
    }
}

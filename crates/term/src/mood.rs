//! Mascot mood indicator.
//!
//! Reacts to placement outcomes: a good drop makes it happy for a moment,
//! a miss or a collapse makes it sad until the next round starts.

use crate::types::{ActOutcome, HAPPY_MOOD_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    #[default]
    Normal,
    Happy,
    Sad,
}

impl Mood {
    pub fn face(self) -> &'static str {
        match self {
            Mood::Normal => "(o_o)",
            Mood::Happy => "(^o^)",
            Mood::Sad => "(T_T)",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoodTracker {
    mood: Mood,
    happy_left_ms: u32,
}

impl MoodTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn on_outcome(&mut self, outcome: ActOutcome) {
        match outcome {
            ActOutcome::Started => self.set(Mood::Normal),
            ActOutcome::FirstPiece | ActOutcome::Extended => {
                self.mood = Mood::Happy;
                self.happy_left_ms = HAPPY_MOOD_MS;
            }
            ActOutcome::Missed | ActOutcome::Collapsing => self.set(Mood::Sad),
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) {
        if self.mood != Mood::Happy {
            return;
        }
        self.happy_left_ms = self.happy_left_ms.saturating_sub(elapsed_ms);
        if self.happy_left_ms == 0 {
            self.mood = Mood::Normal;
        }
    }

    fn set(&mut self, mood: Mood) {
        self.mood = mood;
        self.happy_left_ms = 0;
    }
}

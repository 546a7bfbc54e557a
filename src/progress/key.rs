//! Keys of the game's turn sequence.

use crate::state_enum;

state_enum! {
    /// One phase of a memory-matching round.
    ///
    /// The machine is cyclic: no phase is final.
    pub enum ProgressKey {
        /// Cards are dealt and waiting for the player to begin.
        Start,
        /// Pairs are shown face up for the player to memorize.
        Memorize,
        /// Short pause before the player has to choose.
        Countdown,
        /// The player picks the card matching the shown name.
        Choose,
        /// The outcome of the choice is shown.
        Result,
        /// The table is cleared before the next round.
        Restart,
    }
}

impl ProgressKey {
    /// The phase entered when the machine is triggered in this one.
    ///
    /// Countdown, Choose and Result form a chain that nothing currently
    /// leads into; it stays wired so Memorize or Restart can be pointed at
    /// Countdown later without touching the rest of the graph.
    pub fn successor(self) -> ProgressKey {
        match self {
            Self::Start => Self::Memorize,
            Self::Memorize => Self::Restart,
            Self::Countdown => Self::Choose,
            Self::Choose => Self::Result,
            Self::Result => Self::Restart,
            Self::Restart => Self::Start,
        }
    }
}

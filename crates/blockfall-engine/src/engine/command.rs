use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// A player or driver request, queued by the input source and applied by the
/// engine at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    TogglePause,
    Start,
    Restart,
}

impl Command {
    /// Returns whether the command manipulates the falling piece.
    ///
    /// Gameplay commands are ignored unless the game is running and unpaused.
    #[must_use]
    pub const fn is_gameplay(self) -> bool {
        matches!(
            self,
            Command::MoveLeft
                | Command::MoveRight
                | Command::SoftDrop
                | Command::Rotate
                | Command::HardDrop
        )
    }
}

/// Bounded FIFO of pending commands.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: ArrayVec<Command, { CommandQueue::CAPACITY }>,
}

impl CommandQueue {
    /// Maximum number of commands held between two ticks.
    pub const CAPACITY: usize = 32;

    /// Appends a command. Returns `false` and drops it when the queue is full.
    pub fn push(&mut self, command: Command) -> bool {
        if self.pending.try_push(command).is_err() {
            tracing::warn!(?command, "command queue full, dropping command");
            return false;
        }
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every pending command in submission order, leaving the queue empty.
    pub fn take(&mut self) -> impl Iterator<Item = Command> + use<> {
        std::mem::take(&mut self.pending).into_iter()
    }
}

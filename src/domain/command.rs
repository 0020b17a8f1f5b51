//! Robot command tokens issued from the control panel.

use std::time::Duration;

/// Delay between the "sending" and "executed" status updates on the client.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(500);

/// Status label shown before any command has been issued.
pub const IDLE_STATUS: &str = "Stato: In attesa di comandi...";

/// A movement command understood by the control panel.
///
/// Each variant maps to an Italian wire token, a keyboard key and a slot in
/// the cross-shaped button layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

impl Command {
    /// All commands in the order their buttons appear in the layout grid.
    pub const ALL: [Command; 5] = [
        Command::Forward,
        Command::Left,
        Command::Stop,
        Command::Right,
        Command::Backward,
    ];

    /// Token displayed in status messages.
    pub fn token(self) -> &'static str {
        match self {
            Command::Forward => "AVANTI",
            Command::Backward => "INDIETRO",
            Command::Left => "SINISTRA",
            Command::Right => "DESTRA",
            Command::Stop => "STOP",
        }
    }

    /// `KeyboardEvent.key` value bound to this command.
    pub fn key(self) -> &'static str {
        match self {
            Command::Forward => "ArrowUp",
            Command::Backward => "ArrowDown",
            Command::Left => "ArrowLeft",
            Command::Right => "ArrowRight",
            Command::Stop => " ",
        }
    }

    /// Button caption.
    pub fn glyph(self) -> &'static str {
        match self {
            Command::Forward => "▲",
            Command::Backward => "▼",
            Command::Left => "◀",
            Command::Right => "▶",
            Command::Stop => "STOP",
        }
    }

    /// CSS class placing the button in the layout grid.
    pub fn css_class(self) -> &'static str {
        match self {
            Command::Forward => "btn-up",
            Command::Backward => "btn-down",
            Command::Left => "btn-left",
            Command::Right => "btn-right",
            Command::Stop => "btn-stop",
        }
    }

    /// Status shown as soon as the command is triggered.
    pub fn sending_status(self) -> String {
        format!("Stato: Invio comando {}...", self.token())
    }

    /// Status shown once [`FEEDBACK_DELAY`] has elapsed.
    pub fn executed_status(self) -> String {
        format!("Stato: Eseguito {}", self.token())
    }
}

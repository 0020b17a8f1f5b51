//! Domain layer containing the robot command model.
//!
//! The page never talks to a robot. Commands exist only to drive the control
//! panel: the server renders one button per [`command::Command`] and the
//! client script echoes the chosen command into a status label.
//!
//! # Architecture
//!
//! - [`command`] - Directional and stop commands with their key bindings

pub mod command;

pub use command::{Command, FEEDBACK_DELAY, IDLE_STATUS};

//! Host side message passing: single slot, most recent value channels between modules.
mod message;
mod payloads;
mod recorder;

pub use message::{InPort, Message, MsgHeader};
pub use payloads::{AttRefPayload, HillRelStatePayload, NavAttPayload};
pub use recorder::Recorder;

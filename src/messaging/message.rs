use chrono::TimeDelta;
use std::{cell::Cell, rc::Rc};

/// Bookkeeping stored alongside each payload written to a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgHeader {
    /// Number of writes since the message was created
    pub write_count: u64,
    /// Simulation time of the most recent write
    pub written_at: TimeDelta,
}

impl Default for MsgHeader {
    fn default() -> Self {
        Self {
            write_count: 0,
            written_at: TimeDelta::zero(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct MessageSlot<T> {
    header: MsgHeader,
    payload: T,
}

type SharedSlot<T> = Rc<Cell<MessageSlot<T>>>;

/// Single slot output channel holding the most recently written payload.
///
/// The owning module is the only writer. Any number of [`InPort`]s may subscribe and read
/// the latest value without blocking. Until the first write the slot holds `T::default()`.
#[derive(Debug)]
pub struct Message<T: Copy + Default> {
    slot: SharedSlot<T>,
}

impl<T: Copy + Default> Message<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(Cell::new(MessageSlot::default())),
        }
    }

    pub fn write(&mut self, payload: T, now: TimeDelta) {
        let header = self.slot.get().header;
        self.slot.set(MessageSlot {
            header: MsgHeader {
                write_count: header.write_count + 1,
                written_at: now,
            },
            payload,
        });
    }

    pub fn read(&self) -> T { self.slot.get().payload }

    pub fn header(&self) -> MsgHeader { self.slot.get().header }

    pub fn is_written(&self) -> bool { self.header().write_count > 0 }

    /// Creates an input port already subscribed to this message.
    pub fn subscriber(&self) -> InPort<T> {
        InPort {
            slot: Some(Rc::clone(&self.slot)),
        }
    }
}

impl<T: Copy + Default> Default for Message<T> {
    fn default() -> Self { Self::new() }
}

/// Typed, read-only handle onto a [`Message`] owned by another module.
#[derive(Debug)]
pub struct InPort<T: Copy + Default> {
    slot: Option<SharedSlot<T>>,
}

impl<T: Copy + Default> InPort<T> {
    pub fn new() -> Self { Self { slot: None } }

    pub fn subscribe_to(&mut self, source: &Message<T>) { self.slot = Some(Rc::clone(&source.slot)); }

    pub fn unsubscribe(&mut self) { self.slot = None; }

    pub fn is_linked(&self) -> bool { self.slot.is_some() }

    pub fn is_written(&self) -> bool { self.header().write_count > 0 }

    /// Latest payload, zero initialized if the port is unlinked or nothing was written yet.
    pub fn read(&self) -> T { self.slot.as_ref().map(|slot| slot.get().payload).unwrap_or_default() }

    pub fn header(&self) -> MsgHeader {
        self.slot.as_ref().map(|slot| slot.get().header).unwrap_or_default()
    }
}

impl<T: Copy + Default> Default for InPort<T> {
    fn default() -> Self { Self::new() }
}

use crate::messaging::message::{InPort, Message, MsgHeader};

/// Collects the time history of a message, one sample per new write.
#[derive(Debug)]
pub struct Recorder<T: Copy + Default> {
    port: InPort<T>,
    last_write_count: u64,
    samples: Vec<(MsgHeader, T)>,
}

impl<T: Copy + Default> Recorder<T> {
    pub fn new(source: &Message<T>) -> Self {
        Self {
            port: source.subscriber(),
            last_write_count: 0,
            samples: Vec::new(),
        }
    }

    /// Stores the current payload if it was written since the last sample.
    ///
    /// # Returns
    /// - `true` if a new sample was stored.
    pub fn sample(&mut self) -> bool {
        let header = self.port.header();
        if header.write_count == self.last_write_count {
            return false;
        }
        self.last_write_count = header.write_count;
        self.samples.push((header, self.port.read()));
        true
    }

    pub fn samples(&self) -> &[(MsgHeader, T)] { &self.samples }

    pub fn payloads(&self) -> impl Iterator<Item = &T> { self.samples.iter().map(|(_, payload)| payload) }

    pub fn latest(&self) -> Option<&(MsgHeader, T)> { self.samples.last() }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_write_count = self.port.header().write_count;
    }
}

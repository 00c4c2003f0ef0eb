use crate::device::VirtualDevice;
use crate::error::Result;
use crate::protocol::{Capability, InputEvent};
use tracing::trace;

/// Events collected for one atomic frame.
///
/// Nothing reaches the kernel until [`Frame::commit`], which writes all
/// queued events plus the closing sync marker in a single write. A frame that
/// is dropped without committing is discarded.
pub struct Frame<'a> {
    device: &'a mut VirtualDevice,
    pending_events: Vec<InputEvent>,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(device: &'a mut VirtualDevice) -> Self {
        Self {
            device,
            pending_events: Vec::new(),
        }
    }

    /// Queue an event for this frame
    pub fn push(&mut self, event: InputEvent) -> &mut Self {
        self.pending_events.push(event);
        self
    }

    pub fn set(&mut self, capability: Capability, value: i32) -> &mut Self {
        self.push(capability.event(value))
    }

    pub fn press(&mut self, key: Capability) -> &mut Self {
        self.set(key, 1)
    }

    pub fn release(&mut self, key: Capability) -> &mut Self {
        self.set(key, 0)
    }

    pub fn len(&self) -> usize {
        self.pending_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending_events.is_empty()
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.pending_events
    }

    /// Write the frame. An empty frame writes nothing.
    pub fn commit(self) -> Result<()> {
        let Frame {
            device,
            pending_events,
        } = self;
        trace!("Committing frame of {} events", pending_events.len());
        device.emit(&pending_events)
    }
}

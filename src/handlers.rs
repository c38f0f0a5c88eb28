//! The fixed-capacity message-handler table

use crate::anyvec::AnyVec;
use crate::error::{ErrorKind, MqttError};
use crate::message::Message;

/// A fixed-capacity mapping from subscribed topic filter to inbound-message callback
///
/// Matching is byte-exact equality; the first slot whose filter matches a topic wins. Callbacks
/// are plain function pointers, not boxed closures, matching the engine's allocation-free posture.
pub struct HandlerTable<Bytes, const HANDLERS: usize> {
    /// Fixed slots, indexed arbitrarily; a `None` slot is free
    slots: [Option<(Bytes, fn(&Message<'_>))>; HANDLERS],
}
impl<Bytes, const HANDLERS: usize> Default for HandlerTable<Bytes, HANDLERS>
where
    Bytes: AnyVec<u8>,
{
    fn default() -> Self {
        Self { slots: [(); HANDLERS].map(|()| None) }
    }
}
impl<Bytes, const HANDLERS: usize> HandlerTable<Bytes, HANDLERS>
where
    Bytes: AnyVec<u8>,
{
    /// Installs a handler for `filter`, overwriting the slot already installed for that exact
    /// filter if one exists, or else claiming the first free slot
    ///
    /// Fails with [`ErrorKind::CapacityExceeded`] if no matching slot exists and the table is full.
    pub fn install(&mut self, filter: Bytes, handler: fn(&Message<'_>)) -> Result<(), MqttError> {
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| matches!(slot, Some((installed, _)) if installed.as_ref() == filter.as_ref()))
        {
            *slot = Some((filter, handler));
            return Ok(());
        }
        for slot in &mut self.slots {
            if slot.is_none() {
                *slot = Some((filter, handler));
                return Ok(());
            }
        }
        Err(MqttError::new(ErrorKind::CapacityExceeded))
    }

    /// Removes the handler installed for `filter`, if any
    ///
    /// Returns whether a matching slot was found and cleared.
    pub fn remove(&mut self, filter: &[u8]) -> bool {
        for slot in &mut self.slots {
            if matches!(slot, Some((installed, _)) if installed.as_ref() == filter) {
                *slot = None;
                return true;
            }
        }
        false
    }

    /// Dispatches `message` to the first slot whose filter matches `topic`, falling back to
    /// `default` if no slot matches
    pub fn dispatch(&self, topic: &[u8], message: &Message<'_>, default: Option<fn(&Message<'_>)>) {
        for slot in &self.slots {
            if let Some((filter, handler)) = slot {
                if filter.as_ref() == topic {
                    handler(message);
                    return;
                }
            }
        }
        if let Some(default) = default {
            default(message);
        }
    }
}

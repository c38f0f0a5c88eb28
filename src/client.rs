//! The top-level client facade

use crate::engine::{ConnectionState, Engine};
use crate::error::MqttError;
use crate::limits::Limits;
use crate::message::{Message, Qos};
use crate::options::ConnectOptions;
use crate::timer::Countdown;
use crate::transport::Transport;
use crate::{Bytes, Topics, TopicsQos};

/// A blocking MQTT v3.1.1 client
///
/// This is a thin wrapper around [`crate::engine::Engine`], fixing the engine's topic-collection
/// generics to the crate's default backing containers (see [`crate::Bytes`]/[`crate::Topics`]/
/// [`crate::TopicsQos`]) so callers only ever name the transport, timer, and two capacity constants.
pub struct Client<T, Ti, const SIZE: usize = 100, const HANDLERS: usize = 5>
where
    T: Transport,
    Ti: Countdown,
{
    engine: Engine<T, Ti, Bytes, Topics, TopicsQos, SIZE, HANDLERS>,
}
impl<T, Ti, const SIZE: usize, const HANDLERS: usize> Client<T, Ti, SIZE, HANDLERS>
where
    T: Transport,
    Ti: Countdown + Default,
{
    /// Creates a new client over an already-connected transport
    pub fn new(transport: T, limits: Limits) -> Self {
        Self { engine: Engine::new(transport, limits) }
    }

    /// The connection's current lifecycle state
    pub const fn state(&self) -> ConnectionState {
        self.engine.state()
    }

    /// Installs the fallback handler invoked when no subscribed filter matches an inbound message
    pub fn set_default_handler(&mut self, handler: fn(&Message<'_>)) {
        self.engine.set_default_handler(handler);
    }
    /// Installs the handler invoked once when the connection is declared lost
    pub fn set_connection_lost_handler(&mut self, handler: fn()) {
        self.engine.set_connection_lost_handler(handler);
    }

    /// Performs the CONNECT/CONNACK handshake; returns the broker's CONNACK return code
    pub fn connect(&mut self, options: ConnectOptions<'_>) -> Result<u8, MqttError> {
        self.engine.connect(options)
    }
    /// Subscribes to a single topic filter; returns the broker's granted QoS (or `0x80` if refused)
    pub fn subscribe(&mut self, filter: &[u8], qos: Qos, handler: fn(&Message<'_>)) -> Result<u8, MqttError> {
        self.engine.subscribe(filter, qos, handler)
    }
    /// Unsubscribes from a single topic filter
    pub fn unsubscribe(&mut self, filter: &[u8]) -> Result<(), MqttError> {
        self.engine.unsubscribe(filter)
    }
    /// Publishes a message
    pub fn publish(&mut self, topic: &[u8], payload: &[u8], qos: Qos, retain: bool) -> Result<(), MqttError> {
        self.engine.publish(topic, payload, qos, retain)
    }
    /// Sends DISCONNECT and marks the connection as deliberately closed
    pub fn disconnect(&mut self) -> Result<(), MqttError> {
        self.engine.disconnect()
    }
    /// Drives the client for up to `timeout_ms`, dispatching any inbound traffic and servicing
    /// keep-alive
    pub fn yield_for(&mut self, timeout_ms: u32) -> Result<(), MqttError> {
        self.engine.yield_for(timeout_ms)
    }
}

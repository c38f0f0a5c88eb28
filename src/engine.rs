//! The protocol engine: the blocking MQTT state machine
//!
//! This is the core loop the original's `MQTTClient` ties its `connect`/`subscribe`/`publish`
//! surface to. There is no background thread: inbound traffic is only observed while a command is
//! blocked awaiting its acknowledgement, or while the caller explicitly calls [`Engine::yield_for`].

use core::marker::PhantomData;

use crate::anyvec::AnyVec;
use crate::error::{ErrorKind, MqttError};
use crate::handlers::HandlerTable;
use crate::limits::Limits;
use crate::message::{Message, Qos};
use crate::options::ConnectOptions;
use crate::packetid::PacketIdGenerator;
use crate::packets::connack::Connack;
use crate::packets::connect::Connect;
use crate::packets::disconnect::Disconnect;
use crate::packets::packet::Packet;
use crate::packets::pingreq::Pingreq;
use crate::packets::pingresp::Pingresp;
use crate::packets::puback::Puback;
use crate::packets::pubcomp::Pubcomp;
use crate::packets::publish::Publish;
use crate::packets::pubrec::Pubrec;
use crate::packets::pubrel::Pubrel;
use crate::packets::suback::Suback;
use crate::packets::subscribe::Subscribe;
use crate::packets::unsuback::Unsuback;
use crate::packets::unsubscribe::Unsubscribe;
use crate::packets::TryFromIterator;
use crate::timer::Countdown;
use crate::transport::Transport;

/// The connection's lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No live CONNECT/CONNACK handshake; `connect` has not been called or the connection was lost
    Disconnected,
    /// CONNECT has been sent; awaiting CONNACK
    Connecting,
    /// CONNACK with return code `0` has been received
    Connected,
}

/// The blocking MQTT v3.1.1 protocol engine
///
/// `SIZE` bounds the byte capacity of the send and receive buffers; `HANDLERS` bounds the number of
/// distinct topic filters this engine dispatches directly. `TopicsSeq`/`TopicsQosSeq` are the
/// backing collections for UNSUBSCRIBE/SUBSCRIBE topic lists respectively and only ever surface
/// through the type-erased [`Packet`] this engine decodes into, since every public operation here
/// subscribes or unsubscribes one filter at a time.
pub struct Engine<T, Ti, Bytes, TopicsSeq, TopicsQosSeq, const SIZE: usize = 100, const HANDLERS: usize = 5>
where
    T: Transport,
    Ti: Countdown,
    Bytes: AnyVec<u8>,
    TopicsSeq: AnyVec<Bytes>,
    TopicsQosSeq: AnyVec<(Bytes, u8)>,
{
    /// The underlying byte transport
    transport: T,
    /// The keep-alive ping timer; rearmed after every successful send
    ping_timer: Ti,
    /// Runtime-configurable limits
    limits: Limits,
    /// The negotiated keep-alive interval in seconds; `0` disables keep-alive entirely
    keep_alive_secs: u16,
    /// Whether a PINGREQ has been sent without a matching PINGRESP yet
    ping_outstanding: bool,
    /// The connection's lifecycle state
    state: ConnectionState,
    /// The packet-identifier allocator
    packet_id: PacketIdGenerator,
    /// The installed per-topic message handlers
    handlers: HandlerTable<Bytes, HANDLERS>,
    /// The fallback handler invoked when no installed filter matches an inbound PUBLISH
    default_handler: Option<fn(&Message<'_>)>,
    /// Invoked once when the connection is declared lost
    connection_lost_handler: Option<fn()>,
    /// The outbound packet staging buffer
    send_buf: [u8; SIZE],
    /// The inbound packet staging buffer
    recv_buf: [u8; SIZE],
    /// Ties the unused topic-sequence generics to this type
    _topics: PhantomData<(TopicsSeq, TopicsQosSeq)>,
}
impl<T, Ti, Bytes, TopicsSeq, TopicsQosSeq, const SIZE: usize, const HANDLERS: usize>
    Engine<T, Ti, Bytes, TopicsSeq, TopicsQosSeq, SIZE, HANDLERS>
where
    T: Transport,
    Ti: Countdown + Default,
    Bytes: AnyVec<u8>,
    TopicsSeq: AnyVec<Bytes>,
    TopicsQosSeq: AnyVec<(Bytes, u8)>,
{
    /// Creates a new engine over an already-connected transport
    ///
    /// The connection starts in [`ConnectionState::Disconnected`]; call [`Engine::connect`] before
    /// any other operation.
    pub fn new(transport: T, limits: Limits) -> Self {
        Self {
            transport,
            ping_timer: Ti::default(),
            limits,
            keep_alive_secs: 0,
            ping_outstanding: false,
            state: ConnectionState::Disconnected,
            packet_id: PacketIdGenerator::new(),
            handlers: HandlerTable::default(),
            default_handler: None,
            connection_lost_handler: None,
            send_buf: [0; SIZE],
            recv_buf: [0; SIZE],
            _topics: PhantomData,
        }
    }

    /// The connection's current lifecycle state
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    /// Installs the fallback handler invoked when no subscribed filter matches an inbound message
    pub fn set_default_handler(&mut self, handler: fn(&Message<'_>)) {
        self.default_handler = Some(handler);
    }
    /// Installs the handler invoked once when the connection is declared lost
    pub fn set_connection_lost_handler(&mut self, handler: fn()) {
        self.connection_lost_handler = Some(handler);
    }

    /// Performs the CONNECT/CONNACK handshake
    ///
    /// Returns the broker's CONNACK return code (`0` means accepted) on any reply, even a refusal;
    /// only transport faults, protocol faults, and command timeouts are reported as [`MqttError`].
    pub fn connect(&mut self, options: ConnectOptions<'_>) -> Result<u8, MqttError> {
        let mut timer = Ti::default();
        timer.arm(self.limits.command_timeout_ms);

        self.keep_alive_secs = options.keep_alive_secs();
        self.ping_outstanding = false;
        self.state = ConnectionState::Connecting;

        let mut connect = Connect::<Bytes>::new(options.keep_alive_secs(), options.clean_session(), options.client_id())
            .map_err(|_| MqttError::new(ErrorKind::CapacityExceeded))?;
        if let Some(will) = options.will() {
            connect = connect
                .with_will(will.topic(), will.message(), will.qos().to_bits(), will.retain())
                .map_err(|_| MqttError::new(ErrorKind::CapacityExceeded))?;
        }
        if let (Some(username), Some(password)) = (options.username(), options.password()) {
            connect = connect
                .with_username_password(username, password)
                .map_err(|_| MqttError::new(ErrorKind::CapacityExceeded))?;
        }

        self.send_packet(connect, &timer)?;
        if self.keep_alive_secs != 0 {
            self.ping_timer.arm_seconds(self.keep_alive_secs);
        }

        let packet = self.waitfor(&timer, Connack::TYPE)?;
        let connack = match packet {
            Packet::Connack(connack) => connack,
            #[allow(clippy::unreachable, reason = "waitfor(Connack::TYPE) only ever returns a Connack")]
            _ => unreachable!(),
        };

        self.state =
            if connack.return_code() == 0 { ConnectionState::Connected } else { ConnectionState::Disconnected };
        Ok(connack.return_code())
    }

    /// Subscribes to a single topic filter
    ///
    /// On success, installs `handler` for inbound messages matching `filter` and returns the
    /// granted QoS. If the broker refuses (granted-QoS byte `0x80`), the handler is not installed
    /// and `0x80` is returned — this is not treated as an [`MqttError`].
    pub fn subscribe(&mut self, filter: &[u8], qos: Qos, handler: fn(&Message<'_>)) -> Result<u8, MqttError> {
        let mut timer = Ti::default();
        timer.arm(self.limits.command_timeout_ms);

        let id = self.packet_id.next_id();
        let packet = Subscribe::<TopicsQosSeq, Bytes>::new(id, [(filter, qos.to_bits())])
            .map_err(|_| MqttError::new(ErrorKind::CapacityExceeded))?;
        self.send_packet(packet, &timer)?;

        let response = self.waitfor(&timer, Suback::TYPE)?;
        let suback = match response {
            Packet::Suback(suback) => suback,
            #[allow(clippy::unreachable, reason = "waitfor(Suback::TYPE) only ever returns a Suback")]
            _ => unreachable!(),
        };

        if suback.return_code() != 0x80 {
            let owned_filter = Bytes::new(filter).map_err(|_| MqttError::new(ErrorKind::CapacityExceeded))?;
            self.handlers.install(owned_filter, handler)?;
        }
        Ok(suback.return_code())
    }

    /// Unsubscribes from a single topic filter and removes its installed handler, if any
    pub fn unsubscribe(&mut self, filter: &[u8]) -> Result<(), MqttError> {
        let mut timer = Ti::default();
        timer.arm(self.limits.command_timeout_ms);

        let id = self.packet_id.next_id();
        let packet = Unsubscribe::<TopicsSeq, Bytes>::new(id, [filter])
            .map_err(|_| MqttError::new(ErrorKind::CapacityExceeded))?;
        self.send_packet(packet, &timer)?;

        let _ = self.waitfor(&timer, Unsuback::TYPE)?;
        self.handlers.remove(filter);
        Ok(())
    }

    /// Publishes a message
    ///
    /// For QoS 1, waits for PUBACK. For QoS 2, waits for PUBREC, sends PUBREL, then waits for
    /// PUBCOMP. QoS 0 returns as soon as the PUBLISH is written.
    pub fn publish(&mut self, topic: &[u8], payload: &[u8], qos: Qos, retain: bool) -> Result<(), MqttError> {
        let mut timer = Ti::default();
        timer.arm(self.limits.command_timeout_ms);

        let mut packet =
            Publish::<Bytes>::new(topic, payload, retain).map_err(|_| MqttError::new(ErrorKind::CapacityExceeded))?;
        if qos != Qos::AtMostOnce {
            let id = self.packet_id.next_id();
            packet = packet.with_qos(qos.to_bits(), id, false);
        }
        self.send_packet(packet, &timer)?;

        match qos {
            Qos::AtMostOnce => Ok(()),
            Qos::AtLeastOnce => {
                self.waitfor(&timer, Puback::TYPE)?;
                Ok(())
            }
            Qos::ExactlyOnce => {
                // `dispatch_packet` already answers an inbound PUBREC with PUBREL as a side
                // effect, so the only packet this command itself ever waits for is PUBCOMP.
                self.waitfor(&timer, Pubcomp::TYPE)?;
                Ok(())
            }
        }
    }

    /// Sends DISCONNECT and marks the connection as deliberately closed
    pub fn disconnect(&mut self) -> Result<(), MqttError> {
        let mut timer = Ti::default();
        timer.arm(self.limits.command_timeout_ms);

        self.send_packet(Disconnect::new(), &timer)?;
        self.state = ConnectionState::Disconnected;
        Ok(())
    }

    /// Drives the engine for up to `timeout_ms`, dispatching any inbound traffic and servicing
    /// keep-alive
    ///
    /// This is the only way inbound PUBLISHes are observed outside of a blocking command.
    pub fn yield_for(&mut self, timeout_ms: u32) -> Result<(), MqttError> {
        let mut timer = Ti::default();
        timer.arm(timeout_ms);

        while !timer.expired() {
            if self.state == ConnectionState::Disconnected {
                break;
            }
            self.cycle(&timer)?;
        }
        Ok(())
    }

    /// Runs one read/decode/dispatch/keep-alive iteration, translating any transport or protocol
    /// fault into a connection-lost notification
    fn cycle(&mut self, timer: &Ti) -> Result<Option<Packet<TopicsSeq, TopicsQosSeq, Bytes>>, MqttError> {
        match self.cycle_once(timer) {
            Ok(result) => Ok(result),
            Err(err) if err.kind() == ErrorKind::Timeout => Err(err),
            Err(err) => {
                self.state = ConnectionState::Disconnected;
                if let Some(handler) = self.connection_lost_handler {
                    handler();
                }
                Err(err)
            }
        }
    }

    /// The six-step read cycle: header byte, remaining length, re-encode, body, dispatch,
    /// keep-alive
    fn cycle_once(&mut self, timer: &Ti) -> Result<Option<Packet<TopicsSeq, TopicsQosSeq, Bytes>>, MqttError> {
        let Some(header_byte) = Self::try_read_header(&mut self.transport, timer)? else {
            self.keepalive()?;
            return Ok(None);
        };

        // Decode the 1-4 byte Remaining Length field, one byte at a time; once the header byte has
        // been read a short/absent read is a fault, not "nothing arrived yet"
        let mut rem_len: usize = 0;
        let mut multiplier: usize = 1;
        let mut len_bytes = [0u8; 4];
        let mut len_byte_count = 0usize;
        loop {
            if len_byte_count >= len_bytes.len() {
                return Err(MqttError::new(ErrorKind::ProtocolFault));
            }
            let mut byte_buf = [0u8; 1];
            Self::read_exact(&mut self.transport, &mut byte_buf, timer)?;
            let byte = byte_buf[0];
            len_bytes[len_byte_count] = byte;
            len_byte_count += 1;
            rem_len = rem_len.saturating_add(usize::from(byte & 0x7F).saturating_mul(multiplier));
            multiplier = multiplier.saturating_mul(128);
            if byte & 0x80 == 0 {
                break;
            }
        }

        let header_len = 1usize.saturating_add(len_byte_count);
        let total_len = header_len.saturating_add(rem_len);
        if total_len > SIZE {
            return Err(MqttError::new(ErrorKind::CapacityExceeded));
        }

        // Re-encode the header byte and remaining-length field back into the receive buffer so it
        // holds a contiguous, valid encoded packet
        let Some(header_slot) = self.recv_buf.get_mut(0) else {
            return Err(MqttError::new(ErrorKind::CapacityExceeded));
        };
        *header_slot = header_byte;
        let Some(len_slot) = self.recv_buf.get_mut(1..header_len) else {
            return Err(MqttError::new(ErrorKind::CapacityExceeded));
        };
        len_slot.copy_from_slice(&len_bytes[..len_byte_count]);

        let Some(body_slot) = self.recv_buf.get_mut(header_len..total_len) else {
            return Err(MqttError::new(ErrorKind::CapacityExceeded));
        };
        Self::read_exact(&mut self.transport, body_slot, timer)?;

        let Some(encoded) = self.recv_buf.get(..total_len) else {
            return Err(MqttError::new(ErrorKind::ProtocolFault));
        };
        let packet =
            Packet::try_from_iter(encoded.iter().copied()).map_err(|_| MqttError::new(ErrorKind::ProtocolFault))?;
        let result = self.dispatch_packet(packet, timer)?;
        self.keepalive()?;
        Ok(result)
    }

    /// Handles the side effects of an inbound packet, returning it to the caller when it is one of
    /// the pass-through acknowledgement types a blocking command might be waiting for
    fn dispatch_packet(
        &mut self,
        packet: Packet<TopicsSeq, TopicsQosSeq, Bytes>,
        timer: &Ti,
    ) -> Result<Option<Packet<TopicsSeq, TopicsQosSeq, Bytes>>, MqttError> {
        match packet {
            Packet::Publish(publish) => {
                let qos = Qos::from_bits(publish.qos());
                let message =
                    Message::new(publish.topic(), publish.payload(), qos, publish.retain(), publish.dup(), publish.packet_id());
                self.handlers.dispatch(publish.topic(), &message, self.default_handler);
                match qos {
                    Qos::AtLeastOnce => {
                        if let Some(id) = publish.packet_id() {
                            self.send_packet(Puback::new(id), timer)?;
                        }
                    }
                    Qos::ExactlyOnce => {
                        if let Some(id) = publish.packet_id() {
                            self.send_packet(Pubrec::new(id), timer)?;
                        }
                    }
                    Qos::AtMostOnce => {}
                }
                Ok(None)
            }
            Packet::Pubrec(pubrec) => {
                self.send_packet(Pubrel::new(pubrec.packet_id()), timer)?;
                Ok(None)
            }
            Packet::Pubrel(pubrel) => {
                self.send_packet(Pubcomp::new(pubrel.packet_id()), timer)?;
                Ok(None)
            }
            Packet::Pingresp(_) => {
                self.ping_outstanding = false;
                Ok(None)
            }
            other @ (Packet::Connack(_) | Packet::Puback(_) | Packet::Suback(_) | Packet::Unsuback(_) | Packet::Pubcomp(_)) => {
                Ok(Some(other))
            }
            // CONNECT/SUBSCRIBE/UNSUBSCRIBE/PINGREQ/DISCONNECT never arrive from a broker
            _ => Ok(None),
        }
    }

    /// Repeatedly cycles until a packet of `expected_type` is dispatched or the command timer
    /// expires
    ///
    /// A type mismatch is logged at `warn` and does not itself end the wait: the caller already
    /// committed to waiting for *a* packet of `expected_type`, and the original client does not
    /// validate packet-id correlation either.
    fn waitfor(&mut self, timer: &Ti, expected_type: u8) -> Result<Packet<TopicsSeq, TopicsQosSeq, Bytes>, MqttError> {
        loop {
            if timer.expired() {
                return Err(MqttError::new(ErrorKind::Timeout));
            }
            if let Some(packet) = self.cycle(timer)? {
                if Self::packet_type(&packet) == expected_type {
                    return Ok(packet);
                }
                #[cfg(feature = "log")]
                log::warn!("expected packet type {expected_type} but saw {}", Self::packet_type(&packet));
            }
        }
    }

    /// Services the keep-alive ping timer
    ///
    /// A no-op if keep-alive is disabled. If the ping timer has expired and a PINGREQ is already
    /// outstanding, that is a fatal keep-alive failure: the broker missed a PINGRESP deadline.
    /// Otherwise sends a fresh PINGREQ under its own short timer.
    fn keepalive(&mut self) -> Result<(), MqttError> {
        if self.keep_alive_secs == 0 {
            return Ok(());
        }
        if self.ping_timer.expired() {
            if self.ping_outstanding {
                return Err(MqttError::new(ErrorKind::TransportFault));
            }
            let mut ping_timer = Ti::default();
            ping_timer.arm(1000);
            self.send_packet(Pingreq::new(), &ping_timer)?;
            self.ping_outstanding = true;
        }
        Ok(())
    }

    /// Encodes `packet` into the send buffer and writes it fully, rearming the keep-alive timer on
    /// success
    fn send_packet<P>(&mut self, packet: P, timer: &Ti) -> Result<(), MqttError>
    where
        P: IntoIterator<Item = u8>,
    {
        let mut len = 0usize;
        for byte in packet {
            let Some(slot) = self.send_buf.get_mut(len) else {
                return Err(MqttError::new(ErrorKind::CapacityExceeded));
            };
            *slot = byte;
            len = len.saturating_add(1);
        }

        let Some(payload) = self.send_buf.get(..len) else {
            return Err(MqttError::new(ErrorKind::CapacityExceeded));
        };
        Self::write_exact(&mut self.transport, payload, timer)?;

        if self.keep_alive_secs != 0 {
            self.ping_timer.arm_seconds(self.keep_alive_secs);
        }
        Ok(())
    }

    /// Reads exactly `buf.len()` bytes, or faults
    ///
    /// Any short or absent read is a fault here — this is only called once a header byte has
    /// already been seen, so a partial follow-up means a truncated or stalled connection.
    fn read_exact(transport: &mut T, buf: &mut [u8], timer: &Ti) -> Result<(), MqttError> {
        let mut filled = 0usize;
        while filled < buf.len() {
            let timeout = Self::timeout_ms(timer);
            if timeout == 0 {
                return Err(MqttError::new(ErrorKind::TransportFault));
            }
            let Some(dest) = buf.get_mut(filled..) else {
                return Err(MqttError::new(ErrorKind::ProtocolFault));
            };
            let n = transport.read(dest, timeout);
            if n <= 0 {
                return Err(MqttError::new(ErrorKind::TransportFault));
            }
            filled = filled.saturating_add(n as usize);
        }
        Ok(())
    }

    /// Writes exactly `buf.len()` bytes, or faults
    fn write_exact(transport: &mut T, buf: &[u8], timer: &Ti) -> Result<(), MqttError> {
        let mut sent = 0usize;
        while sent < buf.len() {
            let timeout = Self::timeout_ms(timer);
            if timeout == 0 {
                return Err(MqttError::new(ErrorKind::Timeout));
            }
            let Some(src) = buf.get(sent..) else {
                return Err(MqttError::new(ErrorKind::ProtocolFault));
            };
            let n = transport.write(src, timeout);
            if n < 0 {
                return Err(MqttError::new(ErrorKind::TransportFault));
            }
            sent = sent.saturating_add(n as usize);
        }
        Ok(())
    }

    /// Reads one header byte; `Ok(None)` means nothing arrived before the timer expired, which is
    /// not a fault
    fn try_read_header(transport: &mut T, timer: &Ti) -> Result<Option<u8>, MqttError> {
        let timeout = Self::timeout_ms(timer);
        if timeout == 0 {
            return Ok(None);
        }
        let mut buf = [0u8; 1];
        let n = transport.read(&mut buf, timeout);
        if n < 0 {
            return Err(MqttError::new(ErrorKind::TransportFault));
        }
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(buf[0]))
    }

    /// Clamps a timer's remaining time to a `u32` millisecond budget
    fn timeout_ms(timer: &Ti) -> u32 {
        u32::try_from(timer.remaining_ms().max(0)).unwrap_or(u32::MAX)
    }

    /// Maps a decoded packet to its wire-format type constant
    fn packet_type(packet: &Packet<TopicsSeq, TopicsQosSeq, Bytes>) -> u8 {
        match packet {
            Packet::Connack(_) => Connack::TYPE,
            Packet::Connect(_) => Connect::<Bytes>::TYPE,
            Packet::Disconnect(_) => Disconnect::TYPE,
            Packet::Pingreq(_) => Pingreq::TYPE,
            Packet::Pingresp(_) => Pingresp::TYPE,
            Packet::Puback(_) => Puback::TYPE,
            Packet::Pubcomp(_) => Pubcomp::TYPE,
            Packet::Publish(_) => Publish::<Bytes>::TYPE,
            Packet::Pubrec(_) => Pubrec::TYPE,
            Packet::Pubrel(_) => Pubrel::TYPE,
            Packet::Suback(_) => Suback::TYPE,
            Packet::Subscribe(_) => Subscribe::<TopicsQosSeq, Bytes>::TYPE,
            Packet::Unsuback(_) => Unsuback::TYPE,
            Packet::Unsubscribe(_) => Unsubscribe::<TopicsSeq, Bytes>::TYPE,
        }
    }
}

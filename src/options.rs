//! CONNECT options and last-will configuration

use crate::message::Qos;

/// A last-will message the broker publishes if the client disconnects ungracefully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Will<'a> {
    /// The will topic
    topic: &'a [u8],
    /// The will payload
    message: &'a [u8],
    /// The will quality-of-service level
    qos: Qos,
    /// Whether the broker should retain the will message
    retain: bool,
}
impl<'a> Will<'a> {
    /// Creates a new will
    pub const fn new(topic: &'a [u8], message: &'a [u8], qos: Qos, retain: bool) -> Self {
        Self { topic, message, qos, retain }
    }

    /// The will topic
    pub const fn topic(&self) -> &'a [u8] {
        self.topic
    }
    /// The will payload
    pub const fn message(&self) -> &'a [u8] {
        self.message
    }
    /// The will quality-of-service level
    pub const fn qos(&self) -> Qos {
        self.qos
    }
    /// Whether the broker should retain the will message
    pub const fn retain(&self) -> bool {
        self.retain
    }
}

/// Options for an MQTT CONNECT handshake
///
/// The protocol version is fixed at MQTT 3.1.1 (level `4`) for this core and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectOptions<'a> {
    /// The client identifier
    client_id: &'a [u8],
    /// The keep-alive interval in seconds; `0` disables keep-alive
    keep_alive_secs: u16,
    /// Whether the broker should discard any previous session state
    clean_session: bool,
    /// The optional last-will configuration
    will: Option<Will<'a>>,
    /// The optional username
    username: Option<&'a [u8]>,
    /// The optional password
    password: Option<&'a [u8]>,
}
impl<'a> ConnectOptions<'a> {
    /// Creates new connect options with a 60 second keep-alive and a clean session
    pub const fn new(client_id: &'a [u8]) -> Self {
        Self { client_id, keep_alive_secs: 60, clean_session: true, will: None, username: None, password: None }
    }

    /// Sets the keep-alive interval in seconds
    pub const fn with_keep_alive_secs(mut self, keep_alive_secs: u16) -> Self {
        self.keep_alive_secs = keep_alive_secs;
        self
    }
    /// Sets the clean-session flag
    pub const fn with_clean_session(mut self, clean_session: bool) -> Self {
        self.clean_session = clean_session;
        self
    }
    /// Configures a last-will message
    pub const fn with_will(mut self, will: Will<'a>) -> Self {
        self.will = Some(will);
        self
    }
    /// Configures a username and password
    pub const fn credentials(mut self, username: &'a [u8], password: &'a [u8]) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    /// The client identifier
    pub const fn client_id(&self) -> &'a [u8] {
        self.client_id
    }
    /// The keep-alive interval in seconds
    pub const fn keep_alive_secs(&self) -> u16 {
        self.keep_alive_secs
    }
    /// Whether the broker should discard any previous session state
    pub const fn clean_session(&self) -> bool {
        self.clean_session
    }
    /// The last-will configuration, if any
    pub const fn will(&self) -> Option<Will<'a>> {
        self.will
    }
    /// The username, if any
    pub const fn username(&self) -> Option<&'a [u8]> {
        self.username
    }
    /// The password, if any
    pub const fn password(&self) -> Option<&'a [u8]> {
        self.password
    }
}

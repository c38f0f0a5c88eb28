//! Connects as a client to an MQTT broker, publishes the current Unix timestamp under
//! `mqttengineexamplespublish/date` at QoS 1, and disconnects gracefully

#[cfg(feature = "std")]
pub fn main() {
    use mqtt_engine::timer::SystemCountdown;
    use mqtt_engine::transport::TcpTransport;
    use mqtt_engine::{Client, ConnectOptions, Limits, Qos};
    use std::net::TcpStream;
    use std::time::UNIX_EPOCH;

    let stream = TcpStream::connect("127.0.0.1:1883").expect("failed to connect to broker");
    let transport = TcpTransport::new(stream);
    let mut client = Client::<_, SystemCountdown>::new(transport, Limits::default());

    let options = ConnectOptions::new(b"mqttengineexamplespublish");
    let return_code = client.connect(options).expect("CONNECT handshake failed");
    assert_eq!(return_code, 0, "connection was refused");

    let unix_time = UNIX_EPOCH.elapsed().expect("failed to get unix timestamp");
    let timestamp = format!("{}-unixtime", unix_time.as_secs());

    client
        .publish(b"mqttengineexamplespublish/date", timestamp.as_bytes(), Qos::AtLeastOnce, false)
        .expect("failed to publish message");

    client.disconnect().expect("failed to send DISCONNECT packet");
}

#[cfg(not(feature = "std"))]
pub fn main() {
    panic!("Example requires the `std`-feature");
}

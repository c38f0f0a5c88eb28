//! Connects as a client to an MQTT broker and disconnects gracefully after 3 seconds

#[cfg(feature = "std")]
pub fn main() {
    use mqtt_engine::timer::SystemCountdown;
    use mqtt_engine::transport::TcpTransport;
    use mqtt_engine::{Client, ConnectOptions, Limits};
    use std::net::TcpStream;
    use std::thread;
    use std::time::Duration;

    let stream = TcpStream::connect("127.0.0.1:1883").expect("failed to connect to broker");
    let transport = TcpTransport::new(stream);
    let mut client = Client::<_, SystemCountdown>::new(transport, Limits::default());

    let options = ConnectOptions::new(b"mqttengineexamplesconnect");
    let return_code = client.connect(options).expect("CONNECT handshake failed");
    assert_eq!(return_code, 0, "connection was refused");

    const PAUSE: Duration = Duration::from_secs(3);
    thread::sleep(PAUSE);

    client.disconnect().expect("failed to send DISCONNECT packet");
}

#[cfg(not(feature = "std"))]
pub fn main() {
    panic!("Example requires the `std`-feature");
}

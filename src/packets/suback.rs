//! MQTT [`SUBACK`](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718068)

use crate::coding::encoder::{PacketLenIter, U8Iter, U16Iter, Unit};
use crate::coding::{Decoder, Encoder};
use crate::packets::TryFromIterator;
use core::iter::Chain;

/// An MQTT [`SUBACK` packet](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718068)
///
/// Unlike the other acknowledgement packets, SUBACK carries a payload: one return code per topic
/// filter in the originating SUBSCRIBE. This core only ever subscribes to a single filter per call,
/// so the payload here is fixed at exactly one return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suback {
    /// The packet identifier
    packet_id: u16,
    /// The granted QoS, or `0x80` if the broker refused the subscription
    return_code: u8,
}
impl Suback {
    /// The packet type constant
    pub const TYPE: u8 = 9;

    /// The expected body length: packet id plus one return code
    const BODY_LEN: usize = 3;

    /// Creates a new packet
    pub const fn new(packet_id: u16, return_code: u8) -> Self {
        Self { packet_id, return_code }
    }

    /// The packet ID
    pub const fn packet_id(&self) -> u16 {
        self.packet_id
    }
    /// The granted QoS, or `0x80` if the broker refused the subscription
    pub const fn return_code(&self) -> u8 {
        self.return_code
    }
}
impl TryFromIterator for Suback {
    fn try_from_iter<T>(iter: T) -> Result<Self, &'static str>
    where
        T: IntoIterator<Item = u8>,
    {
        // Read packet:
        //  - header type and `0` flags
        //  - packet len
        //  - packet ID
        //  - return code
        let mut decoder = Decoder::new(iter);
        let (Self::TYPE, _flags) = decoder.header()? else {
            return Err("Invalid packet type");
        };
        let Self::BODY_LEN = decoder.packetlen()? else {
            return Err("Invalid packet length");
        };

        let packet_id = decoder.u16()?;
        let return_code = decoder.u8()?;

        Ok(Self { packet_id, return_code })
    }
}
impl IntoIterator for Suback {
    type Item = u8;
    #[rustfmt::skip]
    type IntoIter =
        Chain<Chain<Chain<Chain<
            // - header type and `0` flags
            Unit, U8Iter>,
            // - packet len
            PacketLenIter>,
            // - packet ID
            U16Iter>,
            // - return code
            U8Iter>;

    fn into_iter(self) -> Self::IntoIter {
        Encoder::default()
            .header(Self::TYPE, [false, false, false, false])
            .packetlen(Self::BODY_LEN)
            .u16(self.packet_id)
            .u8(self.return_code)
            .into_iter()
    }
}

//! Outbound messages for the external synthesizer.

/// USB-MIDI packet header for control changes on the external port.
const CC_HEADER: u8 = 0x2B;
/// USB-MIDI packet header for note messages on the external port.
const NOTE_HEADER: u8 = 0x29;

/// A message destined for the synthesizer on MIDI channel 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutboundMessage {
    ControlChange { cc: u8, value: u8 },
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8 },
}

impl OutboundMessage {
    /// Three-byte MIDI form: status, data1, data2.
    pub fn to_bytes(&self) -> [u8; 3] {
        match *self {
            OutboundMessage::ControlChange { cc, value } => [0xB0, cc & 0x7F, value & 0x7F],
            OutboundMessage::NoteOn { note, velocity } => [0x90, note & 0x7F, velocity & 0x7F],
            OutboundMessage::NoteOff { note } => [0x80, note & 0x7F, 0],
        }
    }

    /// Four-byte USB-MIDI event packet for the external port.
    ///
    /// ```
    /// use sid_control_module::OutboundMessage;
    ///
    /// let cc = OutboundMessage::ControlChange { cc: 7, value: 69 };
    /// assert_eq!(cc.to_usb_packet(), [0x2B, 0xB0, 7, 69]);
    /// ```
    pub fn to_usb_packet(&self) -> [u8; 4] {
        let header = match self {
            OutboundMessage::ControlChange { .. } => CC_HEADER,
            OutboundMessage::NoteOn { .. } | OutboundMessage::NoteOff { .. } => NOTE_HEADER,
        };
        let [status, data1, data2] = self.to_bytes();
        [header, status, data1, data2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_packets() {
        let on = OutboundMessage::NoteOn { note: 36, velocity: 100 };
        assert_eq!(on.to_usb_packet(), [0x29, 0x90, 36, 100]);

        let off = OutboundMessage::NoteOff { note: 36 };
        assert_eq!(off.to_usb_packet(), [0x29, 0x80, 36, 0]);
    }

    #[test]
    fn data_bytes_stay_seven_bit() {
        let cc = OutboundMessage::ControlChange { cc: 0x87, value: 0xFF };
        assert_eq!(cc.to_bytes(), [0xB0, 0x07, 0x7F]);
    }
}

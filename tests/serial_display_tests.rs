use faultseg::{SerialDisplay, StatusDisplay};
use serial_core::{PortSettings, SerialDevice};

mod mock_serial_port;
use crate::mock_serial_port::MockSerialPort;

#[test]
fn configures_port_on_creation() {
    let display = SerialDisplay::try_new(MockSerialPort::new()).unwrap();

    // Ensure serial port was configured correctly (9600 8N1).
    let expected = PortSettings {
        baud_rate: serial_core::BaudRate::Baud9600,
        char_size: serial_core::CharSize::Bits8,
        parity: serial_core::Parity::ParityNone,
        stop_bits: serial_core::StopBits::Stop1,
        flow_control: serial_core::FlowControl::FlowNone,
    };
    assert_eq!(expected, display.port().read_settings().unwrap());
}

#[test]
fn print_clears_then_streams_frame_characters() {
    let mut display = SerialDisplay::try_new(MockSerialPort::new()).unwrap();

    display.print("2201").unwrap();

    assert_eq!([0x76, b'2', b'2', b'0', b'1'], display.port().written());
}

#[test]
fn set_indicator_drives_colon_bit() {
    let mut display = SerialDisplay::try_new(MockSerialPort::new()).unwrap();

    display.set_indicator(true).unwrap();
    display.set_indicator(false).unwrap();

    assert_eq!([0x77, 0x10, 0x77, 0x00], display.port().written());
}

#[test]
fn rotation_frames_stream_in_order() {
    let mut display = SerialDisplay::try_new(MockSerialPort::new()).unwrap();

    display.print("2---").unwrap();
    display.set_indicator(false).unwrap();
    display.print("2201").unwrap();
    display.set_indicator(false).unwrap();

    let expected = [
        0x76, b'2', b'-', b'-', b'-', // restart frame
        0x77, 0x00, // indicator off
        0x76, b'2', b'2', b'0', b'1', // first fault
        0x77, 0x00,
    ];
    assert_eq!(expected, display.port().written());
}

//! Serve battery ADC readings over MSP, the device side of an RC pad link.

use std::thread::sleep;
use std::time::Duration;

use mspv1::{open, AppendPayload, BaudRate, CommandHandler, Payload, Responder};

const SERIAL_PORT: &str = "/dev/ttyACM0";

const CMD_NOP: u8 = 0x00;
const CMD_GET_BATTERY_ADC: u8 = 0x01;

struct Battery {
    adc: u16,
}

impl CommandHandler for Battery {
    fn handle_command(&mut self, command: u8, _payload: &[u8], response: &mut Payload) -> bool {
        match command {
            CMD_NOP => true,
            CMD_GET_BATTERY_ADC => response.append_u16(self.adc).is_ok(),
            _ => false,
        }
    }
}

fn main() {
    let port = open(SERIAL_PORT, BaudRate::B115200).expect("failed to open serial port");
    let mut responder = Responder::new(port, Battery { adc: 512 });

    loop {
        responder.poll().expect("serial link failed");
        sleep(Duration::from_millis(10));
    }
}

//! Poll a device for its battery ADC reading once a second.

use std::thread::sleep;
use std::time::Duration;

use mspv1::{open, BaudRate, Host, PayloadReader};

const SERIAL_PORT: &str = "/dev/ttyACM0";

const CMD_GET_BATTERY_ADC: u8 = 0x01;

fn main() {
    let port = open(SERIAL_PORT, BaudRate::B115200).expect("failed to open serial port");
    let mut host = Host::new(port);

    loop {
        let payload = host
            .request(CMD_GET_BATTERY_ADC, &[])
            .expect("request failed");

        if let Some(adc) = PayloadReader::new(&payload).read_u16() {
            println!("battery ADC: {adc}");
        }

        sleep(Duration::from_secs(1));
    }
}

//! Baud rates commonly found on MSP serial links.

/// Common baud rates of MSP serial links.
///
/// Flight controllers default to 115200 baud; the slower rates show up on
/// telemetry ports and Bluetooth bridges.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum BaudRate {
    /// 9600 baud.
    B9600 = 9_600,
    /// 19200 baud.
    B19200 = 19_200,
    /// 38400 baud.
    B38400 = 38_400,
    /// 57600 baud.
    B57600 = 57_600,
    /// 115200 baud, the common default.
    #[default]
    B115200 = 115_200,
}

impl From<BaudRate> for u32 {
    fn from(baud_rate: BaudRate) -> Self {
        baud_rate as Self
    }
}

#[cfg(feature = "clap")]
impl clap::ValueEnum for BaudRate {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::B9600,
            Self::B19200,
            Self::B38400,
            Self::B57600,
            Self::B115200,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::B9600 => clap::builder::PossibleValue::new("9600"),
            Self::B19200 => clap::builder::PossibleValue::new("19200"),
            Self::B38400 => clap::builder::PossibleValue::new("38400"),
            Self::B57600 => clap::builder::PossibleValue::new("57600"),
            Self::B115200 => clap::builder::PossibleValue::new("115200"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BaudRate;

    #[test]
    fn test_wire_rates() {
        assert_eq!(u32::from(BaudRate::B9600), 9_600);
        assert_eq!(u32::from(BaudRate::B115200), 115_200);
    }

    #[test]
    fn test_default_is_the_flight_controller_rate() {
        assert_eq!(BaudRate::default(), BaudRate::B115200);
    }
}

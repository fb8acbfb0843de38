use strum::{AsRefStr, EnumString};

/// A cell of the 5km forecast grid of the
/// Korea Meteorological Administration (KMA).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmaGrid {
    pub nx: u16,
    pub ny: u16,
}

/// Categories of the KMA ultra short-term observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum ObservationCategory {
    #[strum(serialize = "T1H")]
    Temperature,
    #[strum(serialize = "RN1")]
    Precipitation,
    #[strum(serialize = "UUU")]
    EastWestWind,
    #[strum(serialize = "VVV")]
    NorthSouthWind,
    #[strum(serialize = "REH")]
    Humidity,
    #[strum(serialize = "PTY")]
    PrecipitationType,
    #[strum(serialize = "VEC")]
    WindDirection,
    #[strum(serialize = "WSD")]
    WindSpeed,
}

impl ObservationCategory {
    pub const fn unit(self) -> &'static str {
        use ObservationCategory as C;
        match self {
            C::Temperature => "°C",
            C::Precipitation => "mm",
            C::EastWestWind | C::NorthSouthWind | C::WindSpeed => "m/s",
            C::Humidity => "%",
            C::PrecipitationType => "",
            C::WindDirection => "deg",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Category code as delivered by the provider, e.g. `T1H`.
    pub category: String,
    pub value: f64,
}

impl Observation {
    pub fn category(&self) -> Option<ObservationCategory> {
        self.category.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_categories() {
        let obs = Observation {
            category: "T1H".into(),
            value: 21.5,
        };
        assert_eq!(Some(ObservationCategory::Temperature), obs.category());
        assert_eq!("T1H", ObservationCategory::Temperature.as_ref());
        let obs = Observation {
            category: "XYZ".into(),
            value: 0.0,
        };
        assert_eq!(None, obs.category());
    }
}

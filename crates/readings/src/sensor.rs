use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The fixed set of quantities a monitoring station measures.
///
/// The declaration order is significant: the catalog's display-label
/// tables are index-aligned with [`SensorKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Chlorine,
    OxygenSaturation,
    Oxygen,
    Ph,
    Pressure,
    Salinity,
    AirTemperature,
    WaterTemperature,
}

impl SensorKind {
    /// All sensor kinds, in catalog order.
    pub const ALL: [SensorKind; 8] = [
        SensorKind::Chlorine,
        SensorKind::OxygenSaturation,
        SensorKind::Oxygen,
        SensorKind::Ph,
        SensorKind::Pressure,
        SensorKind::Salinity,
        SensorKind::AirTemperature,
        SensorKind::WaterTemperature,
    ];

    /// The key identifying this kind in endpoint queries and responses.
    pub fn key(self) -> &'static str {
        match self {
            SensorKind::Chlorine => "chlorine",
            SensorKind::OxygenSaturation => "oxygenSaturation",
            SensorKind::Oxygen => "oxygen",
            SensorKind::Ph => "pH",
            SensorKind::Pressure => "pressure",
            SensorKind::Salinity => "salinity",
            SensorKind::AirTemperature => "airTemp",
            SensorKind::WaterTemperature => "waterTemp",
        }
    }

    pub fn from_key(key: &str) -> Option<SensorKind> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// The unit suffix appended to displayed values.
    ///
    /// Temperatures carry `°C` and pressure carries the station's
    /// literal `pHa` suffix; the remaining kinds display bare numbers.
    pub fn unit(self) -> &'static str {
        match self {
            SensorKind::AirTemperature | SensorKind::WaterTemperature => "°C",
            SensorKind::Pressure => "pHa",
            _ => "",
        }
    }
}

impl Display for SensorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

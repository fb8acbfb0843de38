use firespot_entities::weather::{KmaGrid, Observation};

use super::GatewayError;

/// Issue date and hour of an observation, formatted as `YYYYMMDD` and `HH00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDateTime {
    pub date: String,
    pub time: String,
}

pub trait WeatherGateway {
    fn ultra_short_term_observations(
        &self,
        grid: KmaGrid,
        base: &BaseDateTime,
    ) -> Result<Vec<Observation>, GatewayError>;
}

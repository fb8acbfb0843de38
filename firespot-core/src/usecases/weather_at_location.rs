use time::{Duration, OffsetDateTime, UtcOffset};

use super::prelude::*;
use crate::{
    gateways::weather::{BaseDateTime, WeatherGateway},
    util::kma_grid::to_kma_grid,
};

const KST_OFFSET_HOURS: i8 = 9;

/// Observations are published on the hour, but only some minutes later.
/// Asking for the previous hour avoids a gap after each full hour.
const PUBLICATION_DELAY: Duration = Duration::hours(1);

pub fn observation_base_time(now: OffsetDateTime) -> BaseDateTime {
    let kst = UtcOffset::from_hms(KST_OFFSET_HOURS, 0, 0).unwrap_or(UtcOffset::UTC);
    let base = now.to_offset(kst) - PUBLICATION_DELAY;
    BaseDateTime {
        date: format!(
            "{:04}{:02}{:02}",
            base.year(),
            u8::from(base.month()),
            base.day()
        ),
        time: format!("{:02}00", base.hour()),
    }
}

/// Current weather at the fire location.
pub fn weather_at_location<G>(
    gateway: Option<&G>,
    state: &SessionState,
    now: OffsetDateTime,
) -> Result<Vec<Observation>>
where
    G: WeatherGateway + ?Sized,
{
    let gateway = gateway.ok_or_else(|| {
        Error::ConfigMissing("WEATHER_API_KEY and WEATHER_BASE_URL are required".into())
    })?;
    let grid = to_kma_grid(state.current_location);
    let base = observation_base_time(now);
    log::debug!(
        "Requesting observations for grid {},{} at {} {}",
        grid.nx,
        grid.ny,
        base.date,
        base.time
    );
    Ok(gateway.ultra_short_term_observations(grid, &base)?)
}

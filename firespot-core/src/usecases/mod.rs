//! Operations of the location session controller.
//!
//! Every operation receives the session state explicitly and
//! mutates it in place. Nothing is kept in between calls.

mod commit_marker;
mod error;
mod facility_distances;
mod geocode_address;
mod handle_map_click;
mod render_map;
mod weather_at_location;

#[cfg(test)]
mod tests;

pub use self::{
    commit_marker::*, error::Error, facility_distances::*, geocode_address::*,
    handle_map_click::*, render_map::*, weather_at_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use firespot_entities::{
        facility::*, geo::*, location::*, map::*, session::*, weather::*,
    };
}

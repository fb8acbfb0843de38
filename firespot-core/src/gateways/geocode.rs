use super::GatewayError;

pub trait GeoCodingGateway {
    /// Resolve a free-text address into the (latitude, longitude) of the best match.
    ///
    /// Returns `Ok(None)` if the provider does not know the address.
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<(f64, f64)>, GatewayError>;
}

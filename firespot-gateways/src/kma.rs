//! Ultra short-term observations of the
//! Korea Meteorological Administration (KMA).

use std::time::Duration;

use firespot_core::gateways::{
    weather::{BaseDateTime, WeatherGateway},
    GatewayError,
};
use firespot_entities::weather::{KmaGrid, Observation};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str =
    "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getUltraSrtNcst";

const RESULT_CODE_OK: &str = "00";
const NUM_OF_ROWS: &str = "10";

#[derive(Debug, Clone)]
pub struct Kma {
    pub base_url: String,
    pub service_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: Response,
}

#[derive(Debug, Deserialize)]
struct Response {
    header: Header,
    body: Option<Body>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    result_code: String,
    #[serde(default)]
    result_msg: String,
}

#[derive(Debug, Deserialize)]
struct Body {
    items: Items,
}

#[derive(Debug, Deserialize)]
struct Items {
    #[serde(default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Item {
    category: String,
    obsr_value: Value,
}

// The value is a string in some API versions and a number in others.
fn observed_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_observations(body: &str) -> Result<Vec<Observation>, GatewayError> {
    let Envelope { response } = serde_json::from_str(body)
        .map_err(|err| GatewayError::InvalidResponse(err.to_string()))?;
    let Response { header, body } = response;
    if header.result_code != RESULT_CODE_OK {
        return Err(GatewayError::InvalidResponse(format!(
            "Result code {}: {}",
            header.result_code, header.result_msg
        )));
    }
    let items = body.map(|b| b.items.item).unwrap_or_default();
    items
        .into_iter()
        .map(|Item { category, obsr_value }| {
            let value = observed_value(&obsr_value).ok_or_else(|| {
                GatewayError::InvalidResponse(format!("Invalid value of {category}: {obsr_value}"))
            })?;
            Ok(Observation { category, value })
        })
        .collect()
}

impl WeatherGateway for Kma {
    fn ultra_short_term_observations(
        &self,
        grid: KmaGrid,
        base: &BaseDateTime,
    ) -> Result<Vec<Observation>, GatewayError> {
        let nx = grid.nx.to_string();
        let ny = grid.ny.to_string();
        let response = super::client(self.timeout)?
            .get(&self.base_url)
            .query(&[
                ("serviceKey", self.service_key.as_str()),
                ("numOfRows", NUM_OF_ROWS),
                ("pageNo", "1"),
                ("dataType", "JSON"),
                ("base_date", base.date.as_str()),
                ("base_time", base.time.as_str()),
                ("nx", nx.as_str()),
                ("ny", ny.as_str()),
            ])
            .send();
        let body = super::response_text(response)?;
        parse_observations(&body)
    }
}

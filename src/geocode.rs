//! Geocoding HTTP adapter.

use serde::Deserialize;
use thiserror::Error;

use crate::model::Coordinates;
use crate::traits::Geocoder;

pub const DEFAULT_BASE_URL: &str = "https://geocode-maps.yandex.ru/1.x/";

const API_KEY_VAR: &str = "GEOCODER_API_KEY";

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }

    /// Reads the API key from `GEOCODER_API_KEY`. A missing key is a
    /// configuration error, distinct from runtime geocoding failures, so
    /// callers can fail fast at startup instead of once per address.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey(API_KEY_VAR))?;
        Ok(Self::new(api_key))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingApiKey(&'static str),
}

/// A failed attempt to resolve one address. Recovered by the ranking layer
/// as an unresolved distance; never fails a dashboard render.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network failure, timeout, non-success status, or an unparseable body.
    #[error("geocoder request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered but found no places for the address.
    #[error("no places found for address {0:?}")]
    NoMatches(String),

    /// The response arrived but its position field made no sense.
    #[error("malformed geocoder response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone)]
pub struct GeocoderClient {
    config: GeocoderConfig,
    client: reqwest::blocking::Client,
}

impl GeocoderClient {
    pub fn new(config: GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for GeocoderClient {
    fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("apikey", self.config.api_key.as_str()),
                ("format", "json"),
                ("geocode", address),
            ])
            .send()?
            .error_for_status()?
            .json::<GeocoderResponse>()?;

        first_position(response, address)
    }
}

// Wire format: the fixed path down to the position string is
// response.GeoObjectCollection.featureMember[].GeoObject.Point.pos.

#[derive(Debug, Deserialize)]
struct GeocoderResponse {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember")]
    members: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: Point,
}

#[derive(Debug, Deserialize)]
struct Point {
    pos: String,
}

/// The first member is the service's most-relevant match. `pos` is
/// space-separated with longitude first.
fn first_position(response: GeocoderResponse, address: &str) -> Result<Coordinates, GeocodeError> {
    let member = response
        .response
        .collection
        .members
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NoMatches(address.to_string()))?;

    let pos = member.object.point.pos;
    let mut parts = pos.split_whitespace();
    let (Some(lon), Some(lat)) = (parts.next(), parts.next()) else {
        return Err(GeocodeError::Malformed(format!("position {pos:?}")));
    };

    let lon: f64 = lon
        .parse()
        .map_err(|_| GeocodeError::Malformed(format!("longitude {lon:?}")))?;
    let lat: f64 = lat
        .parse()
        .map_err(|_| GeocodeError::Malformed(format!("latitude {lat:?}")))?;

    Ok(Coordinates { lon, lat })
}

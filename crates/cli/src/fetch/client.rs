use aquaprobe_readings::reading::Reading;
use aquaprobe_readings::reading::WireReading;
use aquaprobe_readings::sensor::SensorKind;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::blocking::Response;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

/// The client for the station readings endpoint.
///
/// Requests carry no authentication and no body; the two query shapes
/// below are the whole wire surface of the endpoint.
pub(crate) struct StationClient {
    client: Client,
    endpoint: String,
}

impl StationClient {
    const LATEST_QUERY: &str = "read_lo";
    const HISTORY_QUERY: &str = "read_all";

    pub fn new(endpoint: String) -> StationClient {
        let client = Client::new();

        Self { client, endpoint }
    }

    /// Fetch the latest reading of every sensor kind.
    pub fn latest_all(&self) -> Result<Vec<Reading>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[(Self::LATEST_QUERY, "true")])
            .send()?;

        let wire = Self::decode(response)?;

        wire.into_iter()
            .map(|reading| Reading::from_wire(reading, None).map_err(FetchError::from))
            .collect()
    }

    /// Fetch the history of one sensor kind, newest first.
    pub fn history(&self, kind: SensorKind) -> Result<Vec<Reading>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[(Self::HISTORY_QUERY, kind.key())])
            .send()?;

        let wire = Self::decode(response)?;

        wire.into_iter()
            .map(|reading| Reading::from_wire(reading, Some(kind)).map_err(FetchError::from))
            .collect()
    }

    fn decode(response: Response) -> Result<Vec<WireReading>> {
        match response.status() {
            StatusCode::OK => {
                let readings: Vec<WireReading> = response.json()?;
                Ok(readings)
            }
            status_code => {
                let message = response.text()?;
                let error = FetchError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}

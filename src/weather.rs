use crate::config::WeatherConfig;
use crate::risk::WeatherReading;
use serde::Deserialize;
use std::fmt;

#[derive(Debug)]
pub enum WeatherError {
    MissingApiKey,
    /// The API answered with an `error` object (unknown city, bad key...).
    Api { code: Option<i64>, message: String },
    Transport(reqwest::Error),
    Malformed(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::MissingApiKey => write!(f, "weather API key is not configured"),
            WeatherError::Api { code: Some(code), message } => write!(f, "weather API error {code}: {message}"),
            WeatherError::Api { code: None, message } => write!(f, "weather API error: {message}"),
            WeatherError::Transport(err) => write!(f, "weather request failed: {err}"),
            WeatherError::Malformed(detail) => write!(f, "unexpected weather response: {detail}"),
        }
    }
}

impl std::error::Error for WeatherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WeatherError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Option<WeatherReading>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<i64>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub async fn current(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let key = self.config.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let url = format!("{}/current.json", self.config.base_url);

        // weatherapi.com reports errors with a 4xx status and a JSON body, so
        // the body is decoded regardless of status.
        let body = self
            .http
            .get(url)
            .query(&[("key", key), ("q", city)])
            .send()
            .await?
            .text()
            .await?;

        parse_current(&body)
    }
}

fn parse_current(body: &str) -> Result<WeatherReading, WeatherError> {
    let parsed: CurrentResponse =
        serde_json::from_str(body).map_err(|err| WeatherError::Malformed(err.to_string()))?;

    if let Some(error) = parsed.error {
        return Err(WeatherError::Api {
            code: error.code,
            message: error.message,
        });
    }

    parsed
        .current
        .ok_or_else(|| WeatherError::Malformed("missing `current` object".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_block() {
        let body = r#"{
            "location": { "name": "London" },
            "current": { "temp_c": 12.5, "humidity": 81, "pressure_mb": 1002.0, "wind_kph": 19.1, "is_day": 1 }
        }"#;
        let reading = parse_current(body).unwrap();
        assert_eq!(reading.temp_c, 12.5);
        assert_eq!(reading.humidity, 81.0);
        assert_eq!(reading.pressure_mb, 1002.0);
        assert_eq!(reading.wind_kph, 19.1);
    }

    #[test]
    fn error_object_wins() {
        let body = r#"{ "error": { "code": 1006, "message": "No matching location found." } }"#;
        match parse_current(body) {
            Err(WeatherError::Api { code, message }) => {
                assert_eq!(code, Some(1006));
                assert_eq!(message, "No matching location found.");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_malformed() {
        assert!(matches!(parse_current("{}"), Err(WeatherError::Malformed(_))));
        assert!(matches!(parse_current("<html>"), Err(WeatherError::Malformed(_))));
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let client = WeatherClient::new(WeatherConfig::default()).unwrap();
        assert!(matches!(
            client.current("Paris").await,
            Err(WeatherError::MissingApiKey)
        ));
    }
}

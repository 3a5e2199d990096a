use crate::risk::WeatherReading;
use crate::series::Series;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub total_points: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check: Option<LastCheck>,
}

impl AppData {
    pub fn add_points(&mut self, points: u64) -> u64 {
        self.total_points = self.total_points.saturating_add(points);
        self.total_points
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastCheck {
    pub city: String,
    pub score: u8,
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBadge {
    pub label: String,
    pub class: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub city: String,
    pub conditions: WeatherReading,
    pub score: u8,
    pub risk: RiskBadge,
    pub points_earned: u64,
    pub total_points: u64,
    pub series: Series,
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsResponse {
    pub total_points: u64,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub width: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct FrameResponse {
    pub series: Series,
    pub progress: f64,
    pub done: bool,
    pub svg: String,
}

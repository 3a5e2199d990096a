use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temp_c: f64,
    pub humidity: f64,
    pub pressure_mb: f64,
    pub wind_kph: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => RiskLevel::High,
            40.. => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

/// Additive threshold score, capped at 100.
pub fn risk_score(reading: &WeatherReading) -> u8 {
    let mut score: u32 = 0;

    if reading.humidity > 70.0 {
        score += 20;
    }
    if reading.humidity < 30.0 {
        score += 10;
    }

    if reading.pressure_mb < 1005.0 {
        score += 30;
    }
    if reading.pressure_mb > 1020.0 {
        score += 15;
    }

    if reading.temp_c > 28.0 || reading.temp_c < 3.0 {
        score += 25;
    }

    if reading.wind_kph > 25.0 {
        score += 15;
    }

    score.min(100) as u8
}

pub fn points_for(score: u8) -> u64 {
    u64::from(score / 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temp_c: f64, humidity: f64, pressure_mb: f64, wind_kph: f64) -> WeatherReading {
        WeatherReading {
            temp_c,
            humidity,
            pressure_mb,
            wind_kph,
        }
    }

    #[test]
    fn mild_weather_scores_zero() {
        assert_eq!(risk_score(&reading(18.0, 50.0, 1013.0, 10.0)), 0);
    }

    #[test]
    fn rules_add_up() {
        assert_eq!(risk_score(&reading(31.0, 80.0, 1000.0, 30.0)), 90);
        assert_eq!(risk_score(&reading(1.0, 20.0, 1025.0, 5.0)), 50);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(risk_score(&reading(28.0, 70.0, 1005.0, 25.0)), 0);
        assert_eq!(risk_score(&reading(3.0, 30.0, 1020.0, 25.0)), 0);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39).css_class(), "risk-low");
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40).css_class(), "risk-medium");
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(70).label(), "High");
        assert_eq!(RiskLevel::from_score(70).css_class(), "risk-high");
    }

    #[test]
    fn points_are_tenths_rounded_down() {
        assert_eq!(points_for(85), 8);
        assert_eq!(points_for(23), 2);
        assert_eq!(points_for(9), 0);
        assert_eq!(points_for(100), 10);
    }
}

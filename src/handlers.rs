use crate::errors::AppError;
use crate::models::{
    ChartQuery, CheckRequest, CheckResponse, FrameResponse, LastCheck, PointsResponse, RiskBadge,
};
use crate::plot::{render_svg, PlotOptions};
use crate::risk::{points_for, risk_score, RiskLevel};
use crate::series::Series;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Utc;
use std::time::Instant;
use tracing::{error, info, warn};

pub const DEFAULT_CHART_WIDTH: f64 = 640.0;
const MIN_CHART_WIDTH: f64 = 200.0;
const MAX_CHART_WIDTH: f64 = 4000.0;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let total_points = state.data.lock().await.total_points;
    let committed = state.renderer.lock().await.committed();
    let svg = render_svg(committed.values(), &PlotOptions::new(DEFAULT_CHART_WIDTH))?;
    Ok(Html(render_index(total_points, &svg)))
}

pub async fn get_points(State(state): State<AppState>) -> Json<PointsResponse> {
    let data = state.data.lock().await;
    Json(PointsResponse {
        total_points: data.total_points,
    })
}

pub async fn check(
    State(state): State<AppState>,
    Json(payload): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let city = payload.city.trim();
    if city.is_empty() {
        return Err(AppError::bad_request("Please enter a city"));
    }

    let conditions = state.weather.current(city).await.map_err(|err| {
        warn!(city, "weather lookup failed: {err}");
        AppError::from(err)
    })?;

    let score = risk_score(&conditions);
    let level = RiskLevel::from_score(score);
    let points_earned = points_for(score);
    let series = Series::from_score(score);
    let checked_at = Utc::now();

    let total_points = {
        let mut data = state.data.lock().await;
        let mut updated = data.clone();
        let total = updated.add_points(points_earned);
        updated.last_check = Some(LastCheck {
            city: city.to_string(),
            score,
            checked_at,
        });
        // Memory only moves forward once the file write has landed.
        if let Err(err) = persist_data(&state.data_path, &updated).await {
            error!(city, "failed to save points: {}", err.message);
            return Err(err);
        }
        *data = updated;
        total
    };

    state.renderer.lock().await.begin(series);

    info!(city, score, risk = level.label(), points_earned, total_points, "risk check complete");

    Ok(Json(CheckResponse {
        city: city.to_string(),
        conditions,
        score,
        risk: RiskBadge {
            label: level.label().to_string(),
            class: level.css_class().to_string(),
        },
        points_earned,
        total_points,
        series,
        checked_at,
    }))
}

pub async fn chart_frame(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<FrameResponse>, AppError> {
    let width = chart_width(query.width);
    let frame = state.renderer.lock().await.frame(Instant::now());
    let svg = render_svg(frame.series.values(), &PlotOptions::new(width))?;

    Ok(Json(FrameResponse {
        series: frame.series,
        progress: frame.progress,
        done: frame.done,
        svg,
    }))
}

fn chart_width(requested: Option<f64>) -> f64 {
    match requested {
        Some(width) if width.is_finite() => width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH),
        _ => DEFAULT_CHART_WIDTH,
    }
}

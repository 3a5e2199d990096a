use crate::models::AppData;
use crate::transition::Renderer;
use crate::weather::WeatherClient;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub renderer: Arc<Mutex<Renderer>>,
    pub weather: WeatherClient,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, weather: WeatherClient) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            renderer: Arc::new(Mutex::new(Renderer::default())),
            weather,
        }
    }
}

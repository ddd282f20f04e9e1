use crate::clock::Clock;
use crate::models::AppData;
use chrono::NaiveDate;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub clock: Arc<dyn Clock>,
    pub epoch: NaiveDate,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, clock: Arc<dyn Clock>, epoch: NaiveDate) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            clock,
            epoch,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

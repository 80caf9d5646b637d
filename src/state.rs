use crate::plan::PlanStore;
use chrono::{Local, NaiveDate};
use std::{env, sync::Arc};
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub reference_date: Option<NaiveDate>,
    pub plan: Arc<Mutex<PlanStore>>,
}

impl AppState {
    pub fn new(reference_date: Option<NaiveDate>, plan: PlanStore) -> Self {
        Self {
            reference_date,
            plan: Arc::new(Mutex::new(plan)),
        }
    }

    /// The date used as "today": the `APP_REF_DATE` override when one was
    /// resolved at startup, the wall clock otherwise.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

pub fn resolve_reference_date() -> Option<NaiveDate> {
    let raw = env::var("APP_REF_DATE").ok()?;
    match raw.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(err) => {
            warn!("ignoring APP_REF_DATE {raw:?}: {err}");
            None
        }
    }
}

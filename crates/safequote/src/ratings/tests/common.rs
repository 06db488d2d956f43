use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::ratings::lookup::{LookupError, RatingsLookup};
use crate::ratings::record::{RatingRecord, ResultSet};

/// One observed call against the fake, in the order the resolver made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Call {
    ByModel {
        year: String,
        make: String,
        model: String,
    },
    AllModels {
        year: String,
        make: String,
    },
    Detail(u64),
}

type Reply = Result<ResultSet, LookupError>;

/// Scripted lookup. Each query kind pops its next reply; an exhausted script
/// answers with an empty result set.
#[derive(Debug, Clone, Default)]
pub(super) struct ScriptedLookup {
    calls: Arc<Mutex<Vec<Call>>>,
    by_model: Arc<Mutex<VecDeque<Reply>>>,
    all_models: Arc<Mutex<VecDeque<Reply>>>,
    detail: Arc<Mutex<VecDeque<Reply>>>,
}

impl ScriptedLookup {
    pub(super) fn by_model(self, reply: Reply) -> Self {
        self.by_model.lock().expect("script lock").push_back(reply);
        self
    }

    pub(super) fn all_models(self, reply: Reply) -> Self {
        self.all_models
            .lock()
            .expect("script lock")
            .push_back(reply);
        self
    }

    pub(super) fn detail(self, reply: Reply) -> Self {
        self.detail.lock().expect("script lock").push_back(reply);
        self
    }

    pub(super) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn next(queue: &Mutex<VecDeque<Reply>>) -> Reply {
        queue
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Ok(ResultSet::empty()))
    }
}

impl RatingsLookup for ScriptedLookup {
    async fn lookup_by_year_make_model(
        &self,
        year: &str,
        make: &str,
        model: &str,
    ) -> Result<ResultSet, LookupError> {
        self.record(Call::ByModel {
            year: year.to_string(),
            make: make.to_string(),
            model: model.to_string(),
        });
        Self::next(&self.by_model)
    }

    async fn lookup_all_models_for_make_year(
        &self,
        year: &str,
        make: &str,
    ) -> Result<ResultSet, LookupError> {
        self.record(Call::AllModels {
            year: year.to_string(),
            make: make.to_string(),
        });
        Self::next(&self.all_models)
    }

    async fn lookup_detail_by_id(&self, vehicle_id: u64) -> Result<ResultSet, LookupError> {
        self.record(Call::Detail(vehicle_id));
        Self::next(&self.detail)
    }
}

pub(super) fn record(value: Value) -> RatingRecord {
    serde_json::from_value(value).expect("record object")
}

pub(super) fn results(records: Vec<Value>) -> ResultSet {
    ResultSet::new(records.into_iter().map(record).collect())
}

pub(super) fn listing(models: &[&str]) -> ResultSet {
    results(
        models
            .iter()
            .enumerate()
            .map(|(index, model)| json!({"VehicleId": 100 + index, "Model": model}))
            .collect(),
    )
}

pub(super) fn unavailable() -> LookupError {
    LookupError::Status {
        url: "https://api.nhtsa.gov/SafetyRatings".to_string(),
        status: 503,
    }
}

pub(super) fn by_model(year: &str, make: &str, model: &str) -> Call {
    Call::ByModel {
        year: year.to_string(),
        make: make.to_string(),
        model: model.to_string(),
    }
}

pub(super) fn all_models(year: &str, make: &str) -> Call {
    Call::AllModels {
        year: year.to_string(),
        make: make.to_string(),
    }
}

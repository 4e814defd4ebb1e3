//! Store data operations.
//!
//! There is no backend yet. `PlaceholderDataService` answers with an empty
//! product list and echoes saved transactions back with a fresh id.

use cellar_common::{timestamp_id, BridgeError, Logger};
use serde_json::{json, Map, Value};

/// Source of store data behind the `data:*` operations.
pub trait DataService {
    fn products(&self) -> Result<Vec<Value>, BridgeError>;

    /// Persist a transaction and return it as stored.
    fn save_transaction(&self, payload: Option<&Value>) -> Result<Value, BridgeError>;
}

#[derive(Debug, Clone)]
pub struct PlaceholderDataService {
    api_base_url: String,
    logger: Logger,
}

impl PlaceholderDataService {
    pub fn new(api_base_url: impl Into<String>, logger: Logger) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            logger,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl DataService for PlaceholderDataService {
    fn products(&self) -> Result<Vec<Value>, BridgeError> {
        self.logger
            .debug("Serving placeholder products, backend:", &[&self.api_base_url]);
        Ok(Vec::new())
    }

    fn save_transaction(&self, payload: Option<&Value>) -> Result<Value, BridgeError> {
        let mut record = Map::new();
        record.insert("id".into(), Value::String(timestamp_id()));

        match payload {
            None | Some(Value::Null) => {}
            Some(Value::Object(fields)) => {
                // Caller-supplied fields win, including `id`.
                for (key, value) in fields {
                    record.insert(key.clone(), value.clone());
                }
            }
            Some(other) => {
                return Err(BridgeError::Handler(format!(
                    "transaction must be an object, got {other}"
                )));
            }
        }
        Ok(Value::Object(record))
    }
}

fn failure(error: &str) -> Value {
    json!({ "success": false, "data": null, "error": error })
}

pub fn get_products(service: &dyn DataService, logger: &Logger) -> Value {
    match service.products() {
        Ok(products) => json!({
            "success": true,
            "data": products,
            "message": "Products retrieved successfully",
        }),
        Err(e) => {
            logger.error("Failed to get products:", &[&e]);
            failure("Failed to retrieve products")
        }
    }
}

pub fn save_transaction(
    service: &dyn DataService,
    payload: Option<&Value>,
    logger: &Logger,
) -> Value {
    let shown = payload.map_or_else(|| "null".to_string(), |v| v.to_string());
    logger.info("Saving transaction:", &[&shown]);

    match service.save_transaction(payload) {
        Ok(saved) => json!({
            "success": true,
            "data": saved,
            "message": "Transaction saved successfully",
        }),
        Err(e) => {
            logger.error("Failed to save transaction:", &[&e]);
            failure("Failed to save transaction")
        }
    }
}

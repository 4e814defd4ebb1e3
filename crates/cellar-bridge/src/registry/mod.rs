//! Dispatch of bridge requests to handlers.

use cellar_common::{BridgeError, Logger};
use cellar_config::CellarConfig;
use cellar_host::WindowTarget;
use serde_json::Value;

use crate::handlers::{self, AppInfo, DataService, PlaceholderDataService};
use crate::message::{BridgeReply, BridgeRequest, BridgeResponse};
use crate::operation::{Operation, CATALOG_VERSION};

#[cfg(test)]
mod tests;

/// The host side of the bridge.
///
/// Holds no per-request state: every request is answered in one call, and
/// window operations act on whatever [`WindowTarget`] the caller passes in.
pub struct BridgeRegistry {
    info: AppInfo,
    data: Box<dyn DataService>,
    logger: Logger,
}

impl BridgeRegistry {
    pub fn new(info: AppInfo, data: Box<dyn DataService>, logger: Logger) -> Self {
        logger.info(
            "IPC handlers initialized successfully, catalog version",
            &[&CATALOG_VERSION],
        );
        Self { info, data, logger }
    }

    /// Registry with the placeholder data service pointed at `api.base_url`.
    pub fn from_config(config: &CellarConfig, logger: Logger) -> Self {
        let data = PlaceholderDataService::new(config.api.base_url.clone(), logger.child("Data"));
        Self::new(AppInfo::from_config(config), Box::new(data), logger)
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    /// Run one catalogued operation.
    pub fn invoke(
        &self,
        operation: Operation,
        payload: Option<&Value>,
        target: &mut dyn WindowTarget,
    ) -> Value {
        match operation {
            Operation::AppGetInfo => handlers::app::get_info(&self.info),
            Operation::AppGetVersion => handlers::app::get_version(&self.info),
            Operation::AppGetPlatform => handlers::app::get_platform(&self.info),
            Operation::WindowMinimize => handlers::window::minimize(target),
            Operation::WindowToggleMaximize => handlers::window::toggle_maximize(target),
            Operation::WindowClose => handlers::window::close(target),
            Operation::WindowIsMaximized => handlers::window::is_maximized(&*target),
            Operation::DataGetProducts => {
                handlers::data::get_products(self.data.as_ref(), &self.logger)
            }
            Operation::DataSaveTransaction => {
                handlers::data::save_transaction(self.data.as_ref(), payload, &self.logger)
            }
            Operation::MessageSend => handlers::message::handle(payload, &self.logger),
        }
    }

    /// Answer a parsed request. Channels outside the catalog get an error
    /// reply naming the channel.
    pub fn dispatch(&self, request: &BridgeRequest, target: &mut dyn WindowTarget) -> BridgeReply {
        let response = match Operation::from_channel(&request.channel) {
            Some(operation) => {
                self.logger.debug("Invoking", &[&operation]);
                BridgeResponse::Ok(self.invoke(operation, request.payload.as_ref(), target))
            }
            None => {
                self.logger
                    .warn("No handler registered for channel:", &[&request.channel]);
                BridgeError::UnknownOperation(request.channel.clone()).into()
            }
        };
        BridgeReply {
            id: request.id,
            response,
        }
    }

    /// Parse and answer a raw message body. Malformed bodies are logged and
    /// dropped since there is no id to reply to.
    pub fn handle_raw(&self, raw: &str, target: &mut dyn WindowTarget) -> Option<BridgeReply> {
        match BridgeRequest::from_json(raw) {
            Ok(request) => Some(self.dispatch(&request, target)),
            Err(e) => {
                self.logger.warn("Dropping bridge message:", &[&e]);
                None
            }
        }
    }
}

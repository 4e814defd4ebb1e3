//! The closed catalog of operations content may invoke.

use std::fmt;

/// Bumped whenever an operation is added, removed or changes shape.
pub const CATALOG_VERSION: u32 = 1;

/// Every operation the bridge exposes. Nothing outside this enum is
/// reachable from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AppGetInfo,
    AppGetVersion,
    AppGetPlatform,
    WindowMinimize,
    WindowToggleMaximize,
    WindowClose,
    WindowIsMaximized,
    DataGetProducts,
    DataSaveTransaction,
    MessageSend,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::AppGetInfo,
        Operation::AppGetVersion,
        Operation::AppGetPlatform,
        Operation::WindowMinimize,
        Operation::WindowToggleMaximize,
        Operation::WindowClose,
        Operation::WindowIsMaximized,
        Operation::DataGetProducts,
        Operation::DataSaveTransaction,
        Operation::MessageSend,
    ];

    /// Wire name used in requests.
    pub fn channel(self) -> &'static str {
        match self {
            Self::AppGetInfo => "app:get-info",
            Self::AppGetVersion => "app:get-version",
            Self::AppGetPlatform => "app:get-platform",
            Self::WindowMinimize => "window:minimize",
            Self::WindowToggleMaximize => "window:toggle-maximize",
            Self::WindowClose => "window:close",
            Self::WindowIsMaximized => "window:is-maximized",
            Self::DataGetProducts => "data:get-products",
            Self::DataSaveTransaction => "data:save-transaction",
            Self::MessageSend => "message:send",
        }
    }

    pub fn from_channel(channel: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.channel() == channel)
    }

    /// Method name on the client stub object.
    pub fn stub_method(self) -> &'static str {
        match self {
            Self::AppGetInfo => "getAppInfo",
            Self::AppGetVersion => "getAppVersion",
            Self::AppGetPlatform => "getPlatform",
            Self::WindowMinimize => "minimizeWindow",
            Self::WindowToggleMaximize => "toggleMaximizeWindow",
            Self::WindowClose => "closeWindow",
            Self::WindowIsMaximized => "isWindowMaximized",
            Self::DataGetProducts => "getProducts",
            Self::DataSaveTransaction => "saveTransaction",
            Self::MessageSend => "sendMessage",
        }
    }

    /// Whether the stub method forwards its single argument as the payload.
    pub fn takes_payload(self) -> bool {
        matches!(self, Self::DataSaveTransaction | Self::MessageSend)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.channel())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn channels_are_unique() {
        let channels: HashSet<_> = Operation::ALL.iter().map(|op| op.channel()).collect();
        assert_eq!(channels.len(), Operation::ALL.len());
    }

    #[test]
    fn stub_methods_are_unique() {
        let methods: HashSet<_> = Operation::ALL.iter().map(|op| op.stub_method()).collect();
        assert_eq!(methods.len(), Operation::ALL.len());
    }

    #[test]
    fn channel_lookup_inverts_channel() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_channel(op.channel()), Some(op));
        }
    }

    #[test]
    fn unknown_channels_are_not_in_catalog() {
        assert_eq!(Operation::from_channel("fs:read-file"), None);
        assert_eq!(Operation::from_channel(""), None);
        assert_eq!(Operation::from_channel("APP:GET-INFO"), None);
    }

    #[test]
    fn only_data_and_message_take_payload() {
        let with_payload: Vec<_> = Operation::ALL
            .into_iter()
            .filter(|op| op.takes_payload())
            .collect();
        assert_eq!(
            with_payload,
            vec![Operation::DataSaveTransaction, Operation::MessageSend]
        );
    }
}

use cellar_config::CellarConfig;
use serde::Serialize;
use serde_json::Value;

/// Application identity reported by `app:get-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub platform: String,
    pub arch: String,
}

impl AppInfo {
    pub fn from_config(config: &CellarConfig) -> Self {
        Self {
            name: config.app.name.clone(),
            version: config.app.version.clone(),
            platform: cellar_platform::platform_name().to_string(),
            arch: cellar_platform::arch_name().to_string(),
        }
    }
}

pub fn get_info(info: &AppInfo) -> Value {
    serde_json::json!({
        "name": info.name,
        "version": info.version,
        "platform": info.platform,
        "arch": info.arch,
    })
}

pub fn get_version(info: &AppInfo) -> Value {
    Value::String(info.version.clone())
}

pub fn get_platform(info: &AppInfo) -> Value {
    Value::String(info.platform.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_comes_from_config() {
        let mut config = CellarConfig::default();
        config.app.version = "2.3.4".into();
        let info = AppInfo::from_config(&config);

        assert_eq!(info.name, "Liquor Store Management System");
        assert_eq!(info.version, "2.3.4");
        assert_eq!(info.platform, cellar_platform::platform_name());
        assert_eq!(info.arch, cellar_platform::arch_name());
    }

    #[test]
    fn version_agrees_with_info() {
        let info = AppInfo::from_config(&CellarConfig::default());
        assert_eq!(get_info(&info)["version"], get_version(&info));
    }
}

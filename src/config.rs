use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub tracker: TrackerConfig,
    pub mdm: MdmConfig,
    pub files: FilesConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub directory: String,
    pub debug_file: String,
    pub info_file: String,
    pub warn_file: String,
    pub error_file: String,
    pub console_level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrackerConfig {
    pub base_url: String,
    pub token: String,
    pub checkin_location_id: i64,
    pub checkout_comment: String,
    pub retire_reason_id: i64,
    pub retire_manufacturer: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MdmConfig {
    pub base_url: String,
    pub token: String,
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilesConfig {
    pub data_dir: String,
    pub report_dir: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LimitsConfig {
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_example(path: &str) -> Result<()> {
        let example_config = Config {
            logging: LoggingConfig {
                directory: "./logs".to_string(),
                debug_file: "log_debug.log".to_string(),
                info_file: "log_info.log".to_string(),
                warn_file: "log_warn.log".to_string(),
                error_file: "log_error.log".to_string(),
                console_level: "info".to_string(),
            },
            tracker: TrackerConfig {
                base_url: "https://yourcompany.assettracker.example".to_string(),
                token: "REPLACE_WITH_YOUR_TRACKER_API_TOKEN".to_string(),
                checkin_location_id: 30681,
                checkout_comment: "Automated checkout by asset-audit".to_string(),
                retire_reason_id: 101650,
                retire_manufacturer: "Apple".to_string(),
            },
            mdm: MdmConfig {
                base_url: "https://yourcompany.mdmvendor.example".to_string(),
                token: "REPLACE_WITH_YOUR_MDM_API_TOKEN".to_string(),
                page_size: 100,
            },
            files: FilesConfig {
                data_dir: ".".to_string(),
                report_dir: "reports".to_string(),
            },
            limits: LimitsConfig {
                request_timeout_seconds: 30,
            },
        };

        let toml_content = toml::to_string_pretty(&example_config)?;
        fs::write(path, toml_content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let raw = r#"
            [logging]
            directory = "./logs"
            debug_file = "log_debug.log"
            info_file = "log_info.log"
            warn_file = "log_warn.log"
            error_file = "log_error.log"
            console_level = "debug"

            [tracker]
            base_url = "https://acme.assettracker.example"
            token = "tok"
            checkin_location_id = 1
            checkout_comment = "comment"
            retire_reason_id = 2
            retire_manufacturer = "Apple"

            [mdm]
            base_url = "https://acme.mdmvendor.example"
            token = "tok2"
            page_size = 100

            [files]
            data_dir = "."
            report_dir = "reports"

            [limits]
            request_timeout_seconds = 30
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.tracker.checkin_location_id, 1);
        assert_eq!(config.mdm.page_size, 100);
        assert_eq!(config.limits.request_timeout_seconds, 30);
    }
}

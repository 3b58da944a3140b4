//! 配置文件 (~/.config/lifeplot/config.toml)
//!
//! 文件不存在时使用默认值；每个字段都可省略。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::playback::Year;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 数据集路径，相对路径以当前目录为基准
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default = "default_start_year")]
    pub start_year: Year,
    #[serde(default = "default_end_year")]
    pub end_year: Year,
    /// 两次推进年份之间的间隔
    #[serde(default = "default_transition_interval_ms")]
    pub transition_interval_ms: u64,
    /// 过渡动画时长，年份标签在其一半时更新
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
    /// 播放时事件循环的轮询间隔
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// 启动后立即开始播放
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_start_year() -> Year {
    1950
}

fn default_end_year() -> Year {
    2015
}

fn default_transition_interval_ms() -> u64 {
    750
}

fn default_transition_duration_ms() -> u64 {
    750
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_autoplay() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            transition_interval_ms: default_transition_interval_ms(),
            transition_duration_ms: default_transition_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            autoplay: default_autoplay(),
        }
    }
}

impl Config {
    /// 配置文件路径，取不到配置目录时退回当前目录
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lifeplot").join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_year > self.end_year {
            return Err(ConfigError::Validation {
                message: format!(
                    "start_year ({}) must not be after end_year ({})",
                    self.start_year, self.end_year
                ),
            });
        }

        for (name, value) in [
            ("transition_interval_ms", self.transition_interval_ms),
            ("transition_duration_ms", self.transition_duration_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation {
                    message: format!("{name} must be greater than zero"),
                });
            }
        }

        Ok(())
    }

    pub fn transition_interval(&self) -> Duration {
        Duration::from_millis(self.transition_interval_ms)
    }

    /// 年份标签的延迟：过渡时长的一半
    pub fn label_delay(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms) / 2
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

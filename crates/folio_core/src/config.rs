//! 终端配置

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// 终端配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// 当前用户 (`whoami` 与提示符)
    pub user: String,
    /// 主机名 (macOS 提示符)
    pub hostname: String,
    /// 工作目录 (`pwd`)
    pub home: String,
    /// 提示符中显示的目录名
    pub directory: String,
    /// 资源目录, 简历文件相对于此解析
    pub asset_dir: PathBuf,
    /// 分隔线宽度
    pub rule_width: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "alex".to_string(),
            hostname: "macbook-pro".to_string(),
            home: "/Users/alex/portfolio".to_string(),
            directory: "portfolio".to_string(),
            asset_dir: PathBuf::from("assets"),
            rule_width: 80,
        }
    }
}

impl ShellConfig {
    /// 从 JSON 文本解析, 缺失字段取默认值
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&std::fs::read_to_string(path)?)?;
        tracing::info!("Shell config loaded from {}", path.display());
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> crate::Result<()> {
        if self.user.trim().is_empty() {
            return Err(FolioError::Config("user must not be empty".to_string()));
        }
        if self.rule_width == 0 {
            return Err(FolioError::Config(
                "rule_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// 解析资源文件路径
    pub fn asset_path(&self, file: &str) -> PathBuf {
        self.asset_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();

        assert_eq!(config.user, "alex");
        assert_eq!(config.rule_width, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShellConfig::from_json(r#"{"user": "sam", "home": "/home/sam"}"#).unwrap();

        assert_eq!(config.user, "sam");
        assert_eq!(config.home, "/home/sam");
        assert_eq!(config.hostname, "macbook-pro");
        assert_eq!(config.asset_path("cv.pdf"), PathBuf::from("assets").join("cv.pdf"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            ShellConfig::from_json(r#"{"rule_width": 0}"#),
            Err(FolioError::Config(_))
        ));
        assert!(matches!(
            ShellConfig::from_json(r#"{"user": "  "}"#),
            Err(FolioError::Config(_))
        ));
        assert!(matches!(
            ShellConfig::from_json(r#"{"rule_width": "wide"}"#),
            Err(FolioError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        std::fs::write(&path, r#"{"directory": "work"}"#).unwrap();

        let config = tokio_test::assert_ok!(ShellConfig::load(&path));
        assert_eq!(config.directory, "work");
    }
}

//! 内容文档
//!
//! 作品集终端展示的只读数据源。每个区块都是可选的，
//! 区块缺失或形状不符时只会让对应命令退化为 "not available" 提示。

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// 内置示例文档
const SAMPLE_DOCUMENT: &str = include_str!("../assets/sample_portfolio.json");

/// 工作经历
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    /// 公司
    pub company: String,
    /// 职位
    pub position: String,
    /// 地点
    pub location: String,
    /// 任职时间段
    pub period: String,
    /// 工作描述条目
    pub description: Vec<String>,
}

/// 教育经历
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    /// 学位
    pub degree: String,
    /// 学校
    pub institution: String,
    /// 所属大学 / 考试委员会
    pub university: String,
    /// 就读时间段
    pub period: String,
    /// 成绩
    pub grade: String,
}

/// 作品集内容文档
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    /// 简历文件名 (相对于资源目录)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
}

impl ContentDocument {
    /// 从 JSON 文本构建文档
    ///
    /// 只有整体不是合法 JSON 对象时才报错；单个区块类型不符时丢弃该区块。
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// 从 JSON 值宽松地提取各区块
    pub fn from_value(value: &serde_json::Value) -> crate::Result<Self> {
        if !value.is_object() {
            return Err(FolioError::Content(
                "content document must be a JSON object".to_string(),
            ));
        }

        Ok(Self {
            name: section(value, "name"),
            title: section(value, "title"),
            bio: section(value, "bio"),
            experience: section(value, "experience"),
            education: section(value, "education"),
            skills: section(value, "skills"),
            projects: section(value, "projects"),
            contact: section(value, "contact"),
            certificates: section(value, "certificates"),
            achievements: section(value, "achievements"),
            resume_file: section(value, "resumeFile"),
        })
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let document = Self::from_json(&json)?;
        tracing::info!("Content document loaded from {}", path.display());
        Ok(document)
    }

    /// 内置示例文档
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_DOCUMENT).unwrap_or_default()
    }
}

fn section<T: DeserializeOwned>(root: &serde_json::Value, key: &str) -> Option<T> {
    let value = root.get(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(section = key, error = %e, "content section ignored");
            None
        }
    }
}

use serde::{Deserialize, Serialize};

/// 文章语言类型
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub enum PostLanguage {
    #[serde(rename = "ja")]
    #[default]
    Japanese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ko")]
    Korean,
}

impl std::fmt::Display for PostLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostLanguage::Japanese => write!(f, "ja"),
            PostLanguage::English => write!(f, "en"),
            PostLanguage::Chinese => write!(f, "zh"),
            PostLanguage::Korean => write!(f, "ko"),
        }
    }
}

impl std::str::FromStr for PostLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ja" | "japanese" | "日本語" => Ok(PostLanguage::Japanese),
            "en" | "english" => Ok(PostLanguage::English),
            "zh" | "chinese" | "中文" => Ok(PostLanguage::Chinese),
            "ko" | "korean" | "한국어" => Ok(PostLanguage::Korean),
            _ => Err(format!("Unknown post language: {}", s)),
        }
    }
}

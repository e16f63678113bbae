use crate::config::{Config, LLMProvider};
use crate::i18n::PostLanguage;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// autopress - 由Rust与AI驱动的博客文章自动生成与投稿引擎
#[derive(Parser, Debug)]
#[command(name = "autopress")]
#[command(
    about = "Automation engine for marketing/blog content: generates Markdown drafts from idea lists via LLM, and publishes unsubmitted drafts to WordPress one at a time."
)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 根据ideas清单生成Markdown草稿（已存在的slug自动跳过）
    Generate(GenerateOpts),
    /// 挑选最新的未投稿草稿发布到WordPress
    Publish(PublishOpts),
}

#[derive(Parser, Debug)]
pub struct GenerateOpts {
    /// 记事アイデア一覧（JSON）路径
    #[arg(short, long)]
    pub ideas: Option<PathBuf>,

    /// 草稿输出目录
    #[arg(short, long)]
    pub posts_dir: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 用于文章生成的模型
    #[arg(long)]
    pub model: Option<String>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// LLM Provider (openai, deepseek, moonshot, anthropic, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 文章语言 (ja, en, zh, ko)
    #[arg(long)]
    pub lang: Option<String>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct PublishOpts {
    /// 草稿目录
    #[arg(short, long)]
    pub posts_dir: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

/// 加载基础配置：显式指定的配置文件优先，其次是CWD下的autopress.toml，最后是默认值
fn base_config(config_path: Option<&PathBuf>) -> Config {
    if let Some(config_path) = config_path {
        return Config::from_file(config_path).unwrap_or_else(|_| {
            panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
        });
    }

    let default_config_path = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("autopress.toml");

    if default_config_path.exists() {
        Config::from_file(&default_config_path).unwrap_or_else(|_| {
            panic!(
                "⚠️ 警告: 无法读取默认配置文件 {:?}",
                default_config_path
            )
        })
    } else {
        Config::default()
    }
}

impl GenerateOpts {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = base_config(self.config.as_ref());

        if let Some(ideas) = self.ideas {
            config.idea_file = ideas;
        }
        if let Some(posts_dir) = self.posts_dir {
            config.posts_dir = posts_dir;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 语言配置
        if let Some(lang_str) = self.lang {
            if let Ok(lang) = lang_str.parse::<PostLanguage>() {
                config.lang = lang;
            } else {
                eprintln!("⚠️ 警告: 未知的语言: {}，使用默认语言 (ja)", lang_str);
            }
        }

        config.verbose = self.verbose;
        config
    }
}

impl PublishOpts {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = base_config(self.config.as_ref());

        if let Some(posts_dir) = self.posts_dir {
            config.posts_dir = posts_dir;
        }
        config.verbose = self.verbose;
        config
    }
}

//! アイデア清单 → Markdown草稿的生成流程

use anyhow::{Result, ensure};
use chrono::Local;

use crate::config::Config;
use crate::draft::{Draft, FrontMatter};
use crate::ideas::{Idea, load_ideas};
use crate::llm::{LLMClient, TextGenerator};

/// 编辑角色的系统提示词，与既存运用保持一致
const SYSTEM_PROMPT: &str = "あなたはマーケティング向けの編集者です。\
以下の制約で 1200〜1500 文字の記事を書いてください：\n\
・見出しは h2 (##) を 3〜4 個\n\
・最後に CTA を入れる\n\
・語調はフレンドリーだが専門性を示す\n";

/// 一次生成运行的结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateReport {
    pub generated: usize,
    pub skipped: usize,
}

/// 启动草稿生成工作流
pub async fn launch(config: &Config) -> Result<()> {
    let client = LLMClient::new(config.clone())?;
    let report = run(config, &client).await?;

    println!(
        "🎉 done: {} generated, {} skipped",
        report.generated, report.skipped
    );
    Ok(())
}

/// 逐条处理アイデア：已有草稿的slug跳过（幂等），其余调用模型生成并落盘。
/// 生成失败不重试，直接中止整个批次
pub async fn run(config: &Config, generator: &dyn TextGenerator) -> Result<GenerateReport> {
    std::fs::create_dir_all(&config.posts_dir)?;

    let ideas = load_ideas(&config.idea_file)?;
    let today = Local::now().date_naive();
    let mut report = GenerateReport::default();

    for idea in &ideas {
        ensure!(
            idea.has_safe_slug(),
            "unsafe slug in idea file: {:?}",
            idea.slug
        );

        let md_path = config.posts_dir.join(format!("{}.md", idea.slug));
        if md_path.exists() {
            if config.verbose {
                println!("⏭️ skip (already generated): {}", idea.slug);
            }
            report.skipped += 1;
            continue;
        }

        let body = generator
            .generate(SYSTEM_PROMPT, &build_user_prompt(idea))
            .await?;

        let draft = Draft {
            path: md_path.clone(),
            front_matter: FrontMatter {
                title: Some(idea.title.clone()),
                date: Some(today),
                slug: Some(idea.slug.clone()),
                tags: config.default_tags.clone(),
                lang: config.lang,
                submitted: None,
            },
            body,
        };
        draft.save()?;

        println!("✅ generated {:?}", md_path);
        report.generated += 1;
    }

    Ok(report)
}

/// 用户提示词：标题 + お题
fn build_user_prompt(idea: &Idea) -> String {
    format!("タイトル: {}\nお題: {}", idea.title, idea.prompt)
}

// Include tests
#[cfg(test)]
mod tests;

//! 未投稿草稿的一次性发布流程：
//! 最新の未投稿を1本選び、HTML化してWordPressへ公開し、submittedフラグを書き戻す

use anyhow::Result;
use chrono::Utc;

use crate::config::{Config, WpCredentials};
use crate::draft::{FrontMatterStatusStore, StatusStore, find_unsubmitted};
use crate::wp::{NewPost, RemoteSite, WordPressClient};

pub mod category;
pub mod media;

use category::detect_category;
use media::{JsonPoolStore, MediaRotation, PoolStore};

/// 一次发布运行的结果
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    /// 未投稿草稿不存在，无事可做
    NothingToDo,
    /// 远端已有同slug投稿，跳过创建但本地已标记submitted
    SkippedExisting { slug: String },
    /// 新投稿发布成功
    Published { post_id: u64, link: String },
}

/// 启动发布工作流。凭证缺失在做任何事之前就失败
pub async fn launch(config: &Config) -> Result<()> {
    let credentials = WpCredentials::from_env()?;
    let site = WordPressClient::new(credentials);
    let store = JsonPoolStore::new(config.media_pool_path());
    let mut rotation = MediaRotation::new(store, config.wordpress.media_ids.clone());
    let mut status = FrontMatterStatusStore::new(config.posts_dir.clone());

    run(config, &site, &mut rotation, &mut status).await?;
    Ok(())
}

/// 发布一篇草稿。状态机：未投稿 → 新规公開 or 远端既存（跳过创建）→ submitted=true。
/// 单向一次性迁移，没有回到未投稿的路径
pub async fn run<S: PoolStore>(
    config: &Config,
    site: &dyn RemoteSite,
    rotation: &mut MediaRotation<S>,
    status: &mut dyn StatusStore,
) -> Result<PublishOutcome> {
    let Some(draft) = find_unsubmitted(&config.posts_dir)? else {
        println!("❌ 未投稿の記事がありません");
        return Ok(PublishOutcome::NothingToDo);
    };

    let slug = draft.slug();
    let title = draft.title();
    let html = markdown::to_html(&draft.body);
    let category_id = detect_category(&slug, &config.wordpress);

    // WP側に既に同slugがある場合はスキップ。ローカルはsubmitted扱いにして再試行を止める
    if site.post_exists(&slug).await? {
        println!("🚫 Skip: slug '{}' already exists on WordPress", slug);
        status.mark_submitted(&slug)?;
        return Ok(PublishOutcome::SkippedExisting { slug });
    }

    let media_id = rotation.next_media_id()?;
    println!("🎯 slug: {} / category_id: {}", slug, category_id);
    println!("🎲 selected featured_media ID: {}", media_id);

    let post = NewPost {
        title,
        content: html,
        status: "publish".to_string(),
        categories: vec![category_id],
        tags: config.wordpress.tag_ids.clone(),
        lang: config.lang.to_string(),
        date: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
    };
    let created = site.create_post(&post).await?;
    println!("✅ Posted: {}", created.link);

    // アイキャッチ付与はベストエフォート。失敗してもロールバックしない
    match site.attach_media(created.id, media_id).await {
        Ok(()) => println!("📷 featured media attached: {}", media_id),
        Err(e) => eprintln!("⚠️ failed to attach featured media: {}", e),
    }

    status.mark_submitted(&slug)?;
    println!("📝 frontmatter updated: {:?}", draft.path);
    println!("🎉 All done → {}", created.link);

    Ok(PublishOutcome::Published {
        post_id: created.id,
        link: created.link,
    })
}

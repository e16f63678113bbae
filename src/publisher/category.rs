use crate::config::WordPressConfig;

/// slug先頭のキーワードでカテゴリ判定。未命中时退回兜底分类。
/// 纯函数，对任意输入都有返回值
pub fn detect_category(slug: &str, wordpress: &WordPressConfig) -> u64 {
    let key = slug.split('-').next().unwrap_or_default().to_lowercase();
    wordpress
        .category_map
        .get(&key)
        .copied()
        .unwrap_or(wordpress.default_category_id)
}

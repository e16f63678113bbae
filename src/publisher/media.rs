//! アイキャッチ画像IDのローテーション。
//! 候補集合をシャッフルした順列をプールとして持ち、1回の投稿につき1個取り出す。
//! プールが尽きたら改めてシャッフルして補充する——1周の間はIDが重複しない

use anyhow::{Context, Result, ensure};
use rand::seq::SliceRandom;
use std::path::PathBuf;

/// プールの永続化先の抽象。テストではメモリ実装に差し替えられる
pub trait PoolStore {
    fn load(&self) -> Result<Vec<u64>>;
    fn save(&mut self, pool: &[u64]) -> Result<()>;
}

/// JSONファイルに保存するデフォルト実装。ファイルが無ければ空プール扱い。
/// 同時書き込みは想定しない（単一ライター前提）
pub struct JsonPoolStore {
    path: PathBuf,
}

impl JsonPoolStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PoolStore for JsonPoolStore {
    fn load(&self) -> Result<Vec<u64>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let content = std::fs::read_to_string(&self.path)
            .context(format!("Failed to read media pool: {:?}", self.path))?;
        let pool: Vec<u64> =
            serde_json::from_str(&content).context("Failed to parse media pool")?;
        Ok(pool)
    }

    fn save(&mut self, pool: &[u64]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(pool)?;
        std::fs::write(&self.path, content)
            .context(format!("Failed to write media pool: {:?}", self.path))?;
        Ok(())
    }
}

/// メモリ上のプール。ローテーションロジックをファイルシステム抜きでテストするための実装
#[derive(Default)]
pub struct MemoryPoolStore {
    pool: Vec<u64>,
}

impl PoolStore for MemoryPoolStore {
    fn load(&self) -> Result<Vec<u64>> {
        Ok(self.pool.clone())
    }

    fn save(&mut self, pool: &[u64]) -> Result<()> {
        self.pool = pool.to_vec();
        Ok(())
    }
}

/// 注入可能なローテーション状態プロバイダ
pub struct MediaRotation<S: PoolStore> {
    store: S,
    candidates: Vec<u64>,
}

impl<S: PoolStore> MediaRotation<S> {
    pub fn new(store: S, candidates: Vec<u64>) -> Self {
        Self { store, candidates }
    }

    /// 次のmedia IDを取り出す。候補集合を1周使い切るまで重複しない
    pub fn next_media_id(&mut self) -> Result<u64> {
        ensure!(
            !self.candidates.is_empty(),
            "media candidate list is empty"
        );

        let mut pool = self.store.load()?;
        if pool.is_empty() {
            pool = self.candidates.clone();
            pool.shuffle(&mut rand::rng());
        }

        let media_id = pool.pop().context("media pool unexpectedly empty")?;
        self.store.save(&pool)?;
        Ok(media_id)
    }
}

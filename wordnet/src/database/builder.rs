//! データベース構築のためのビルダー
//!
//! このモジュールは、品詞ごとの行ソースから [`Database`] を構築するための
//! ビルダーを提供します。

use std::io::BufRead;

use crate::database::{Bucket, Database};
use crate::errors::{Result, WordnetError};
use crate::pos::PartOfSpeech;

/// 品詞バケットから [`Database`] を構築するビルダー
///
/// 4つの品詞すべてのソースを追加してから [`build`](Self::build) を呼び出します。
/// ビルダーは `build` で消費されるため、構築途中の状態が外部から見えることはありません。
#[derive(Default)]
pub struct DatabaseBuilder {
    buckets: [Option<Bucket>; 4],
}

impl DatabaseBuilder {
    /// 新しいビルダーを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 1つの品詞のソースを読み込み、バケットとして追加します。
    ///
    /// # 引数
    ///
    /// * `pos` - ソースの品詞
    /// * `rdr` - `data.<pos>` 形式の行ソース
    ///
    /// # エラー
    ///
    /// 同じ品詞が既に追加されている場合、読み込みに失敗した場合、
    /// 行の構造が不正な場合に [`WordnetError`] を返します。
    pub fn add_source<R>(&mut self, pos: PartOfSpeech, rdr: R) -> Result<&mut Self>
    where
        R: BufRead,
    {
        let slot = &mut self.buckets[pos.index()];
        if slot.is_some() {
            return Err(WordnetError::DuplicateSource(pos));
        }
        *slot = Some(Bucket::from_reader(pos, rdr)?);
        Ok(self)
    }

    /// 追加されたバケットから [`Database`] を構築します。
    ///
    /// # エラー
    ///
    /// 追加されていない品詞がある場合に [`WordnetError::MissingSource`] を返します。
    pub fn build(self) -> Result<Database> {
        let [noun, verb, adj, adv] = self.buckets;
        let take = |bucket: Option<Bucket>, pos| bucket.ok_or(WordnetError::MissingSource(pos));

        let database = Database::from_buckets([
            take(noun, PartOfSpeech::Noun)?,
            take(verb, PartOfSpeech::Verb)?,
            take(adj, PartOfSpeech::Adjective)?,
            take(adv, PartOfSpeech::Adverb)?,
        ]);
        log::info!("database ready with {} entries", database.len());
        Ok(database)
    }
}

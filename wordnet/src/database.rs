//! 語彙データベース
//!
//! このモジュールは、4つの品詞バケットからなる読み取り専用のデータベースを提供します。
//! 各バケットは、IDからエントリへの主マッピングと、小文字化した表層形から
//! エントリのリストへの検索索引を持ちます。
//!
//! # データベースの読み込み方法
//!
//! - [`Database::from_sources`]: [`DataSources`] が示す `data.<pos>` ファイルから読み込む
//! - [`Database::from_readers`]: 4つのリーダーから読み込む
//! - [`Database::load`]: `(品詞, 行ソース)` の組から読み込む
//! - [`DatabaseBuilder`]: バケットを1つずつ追加して構築する
//!
//! いずれの方法でも、4つのバケットすべての読み込みに成功した場合にのみ
//! [`Database`] が返されます。構築後は変更されないため、複数のスレッドから
//! ロックなしで参照できます。
pub mod builder;
pub mod config;

use std::io::{BufRead, BufReader, Read};

use hashbrown::HashMap;

use crate::entry::Entry;
use crate::errors::{Result, WordnetError};
use crate::parser;
use crate::pos::PartOfSpeech;
use crate::synset::Synset;

pub use crate::database::builder::DatabaseBuilder;
pub use crate::database::config::{DEFAULT_DATA_DIR, DataSources};

/// 1つの品詞のエントリと検索索引
#[derive(Debug, Default)]
pub(crate) struct Bucket {
    // File order. A repeated id keeps the earlier entry here; `ids` points at the latest.
    entries: Vec<Entry>,
    ids: HashMap<u32, usize>,
    index: HashMap<String, Vec<usize>>,
}

impl Bucket {
    /// 行ソースを最後まで読み込み、バケットを構築します。
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合や、行の構造が不正な場合にエラーを返します。
    /// エラーには品詞と1始まりの行番号が含まれます。
    pub(crate) fn from_reader<R>(pos: PartOfSpeech, rdr: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut bucket = Self::default();
        let mut skipped = 0;

        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            match parser::parse_line(&line, pos) {
                Ok(Some(entry)) => bucket.insert(entry),
                Ok(None) => skipped += 1,
                Err(e) => return Err(WordnetError::invalid_record(pos, i + 1, e)),
            }
        }

        log::info!(
            "loaded {} entries into the {} bucket ({} header lines skipped)",
            bucket.entries.len(),
            pos,
            skipped,
        );
        Ok(bucket)
    }

    fn insert(&mut self, entry: Entry) {
        let idx = self.entries.len();
        for w in entry.words() {
            self.index.entry(w.word.to_lowercase()).or_default().push(idx);
        }
        if self.ids.insert(entry.id(), idx).is_some() {
            log::warn!(
                "duplicate id {:08} in the {} bucket; the later line wins lookups",
                entry.id(),
                entry.part_of_speech(),
            );
        }
        self.entries.push(entry);
    }

    #[inline(always)]
    fn get(&self, id: u32) -> Option<&Entry> {
        self.ids.get(&id).map(|&i| &self.entries[i])
    }

    fn search(&self, key: &str) -> impl Iterator<Item = &Entry> + '_ {
        self.index
            .get(key)
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }
}

/// 読み取り専用の語彙データベース
///
/// すべてのエントリを所有します。エントリ同士はIDでのみ参照し合います。
#[derive(Debug)]
pub struct Database {
    buckets: [Bucket; 4],
}

impl Database {
    pub(crate) const fn from_buckets(buckets: [Bucket; 4]) -> Self {
        Self { buckets }
    }

    /// `(品詞, 行ソース)` の組から新しいインスタンスを作成します。
    ///
    /// # エラー
    ///
    /// 4つの品詞のうち与えられなかったもの・重複したものがある場合、
    /// 読み込みに失敗した場合、行の構造が不正な場合に [`WordnetError`] を返します。
    /// 部分的に構築されたデータベースが返されることはありません。
    pub fn load<I, R>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PartOfSpeech, R)>,
        R: BufRead,
    {
        let mut builder = DatabaseBuilder::new();
        for (pos, rdr) in sources {
            builder.add_source(pos, rdr)?;
        }
        builder.build()
    }

    /// 4つのリーダーから新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    ///  - `noun_rdr`: `data.noun` のリーダー
    ///  - `verb_rdr`: `data.verb` のリーダー
    ///  - `adj_rdr`: `data.adj` のリーダー
    ///  - `adv_rdr`: `data.adv` のリーダー
    ///
    /// # エラー
    ///
    /// 入力フォーマットが不正な場合に [`WordnetError`] を返します。
    pub fn from_readers<N, V, A, R>(noun_rdr: N, verb_rdr: V, adj_rdr: A, adv_rdr: R) -> Result<Self>
    where
        N: Read,
        V: Read,
        A: Read,
        R: Read,
    {
        let mut builder = DatabaseBuilder::new();
        builder
            .add_source(PartOfSpeech::Noun, BufReader::new(noun_rdr))?
            .add_source(PartOfSpeech::Verb, BufReader::new(verb_rdr))?
            .add_source(PartOfSpeech::Adjective, BufReader::new(adj_rdr))?
            .add_source(PartOfSpeech::Adverb, BufReader::new(adv_rdr))?;
        builder.build()
    }

    /// [`DataSources`] が示すファイルから新しいインスタンスを作成します。
    ///
    /// # エラー
    ///
    /// ファイルが存在しない場合、ディレクトリである場合、
    /// 内容が不正な場合に [`WordnetError`] を返します。
    pub fn from_sources(sources: &DataSources) -> Result<Self> {
        Self::load(sources.open()?)
    }

    #[inline(always)]
    fn bucket(&self, pos: PartOfSpeech) -> &Bucket {
        &self.buckets[pos.index()]
    }

    /// IDと品詞でシンセットを取得します。
    ///
    /// # 戻り値
    ///
    /// そのバケットに該当するIDのエントリがなければ `None`
    pub fn lookup(&self, id: u32, pos: PartOfSpeech) -> Option<Synset<'_>> {
        self.bucket(pos).get(id).map(|e| Synset::new(self, e))
    }

    /// 表層形でシンセットを検索します（大文字小文字を区別しない）。
    ///
    /// 品詞を省略した場合は名詞・動詞・形容詞・副詞の順に検索し、結果を連結します。
    ///
    /// # 戻り値
    ///
    /// ファイル順のシンセットのリスト。該当がなければ空のリスト
    pub fn search(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<Synset<'_>> {
        let key = word.to_lowercase();
        let key = key.as_str();
        let parts: &[PartOfSpeech] = match &pos {
            Some(pos) => std::slice::from_ref(pos),
            None => &PartOfSpeech::ALL,
        };
        parts
            .iter()
            .flat_map(|&pos| self.bucket(pos).search(key))
            .map(|e| Synset::new(self, e))
            .collect()
    }

    /// [`search`](Self::search) の最初の結果を返します。
    pub fn find(&self, word: &str, pos: Option<PartOfSpeech>) -> Option<Synset<'_>> {
        self.search(word, pos).into_iter().next()
    }

    /// 指定された品詞のシンセットをファイル順に返します。
    pub fn iter(&self, pos: PartOfSpeech) -> impl Iterator<Item = Synset<'_>> + '_ {
        self.bucket(pos)
            .entries
            .iter()
            .map(move |e| Synset::new(self, e))
    }

    /// 指定された品詞のエントリ数。
    #[inline(always)]
    pub fn num_entries(&self, pos: PartOfSpeech) -> usize {
        self.bucket(pos).entries.len()
    }

    /// 全品詞のエントリ数。
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    /// エントリが1つもないかどうか。
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! 語彙エントリ（シンセット）のデータモデル
//!
//! [`Entry`] はロード時に1回だけ作成され、その後は変更されません。
//! 他のエントリへの参照はIDのみで保持し、所有はしません。

use std::sync::OnceLock;

use crate::graph::AncestorDistances;
use crate::pointer::{Pointer, PointerSymbol};
use crate::pos::PartOfSpeech;

/// シンセットの構成語と語彙マーカーの組
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SynsetWord {
    /// 表層形（アンダースコアは空白に置換済み）
    pub word: String,

    /// 語彙マーカー（`lex_id`）
    pub marker: String,
}

impl SynsetWord {
    /// 新しいインスタンスを作成します。
    pub fn new<W, M>(word: W, marker: M) -> Self
    where
        W: Into<String>,
        M: Into<String>,
    {
        Self {
            word: word.into(),
            marker: marker.into(),
        }
    }
}

/// 1つのシンセット
#[derive(Debug)]
pub struct Entry {
    id: u32,
    pos: PartOfSpeech,
    words: Vec<SynsetWord>,
    pointers: Vec<Pointer>,
    gloss: Option<String>,

    // Filled at most once; the graph is immutable after load.
    distances: OnceLock<AncestorDistances>,
}

impl Entry {
    /// 解析済みのフィールドから新しいインスタンスを作成します。
    pub(crate) fn new(
        id: u32,
        pos: PartOfSpeech,
        words: Vec<SynsetWord>,
        pointers: Vec<Pointer>,
        gloss: Option<String>,
    ) -> Self {
        Self {
            id,
            pos,
            words,
            pointers,
            gloss,
            distances: OnceLock::new(),
        }
    }

    /// バケット内で一意なID（オフセット）。
    #[inline(always)]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// このエントリの品詞。
    #[inline(always)]
    pub const fn part_of_speech(&self) -> PartOfSpeech {
        self.pos
    }

    /// ファイル順の構成語。重複も保持します。
    #[inline(always)]
    pub fn words(&self) -> &[SynsetWord] {
        &self.words
    }

    /// ファイル順の関係ポインタ。
    #[inline(always)]
    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    /// 定義文・用例。`|` がない行では `None`。
    #[inline(always)]
    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    /// 指定された表層形を含むかどうか（大文字小文字を区別しない）。
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| w.word.to_lowercase() == word)
    }

    /// 指定された表層形の最初の語彙マーカー（大文字小文字を区別しない）。
    pub fn marker(&self, word: &str) -> Option<&str> {
        let word = word.to_lowercase();
        self.words
            .iter()
            .find(|w| w.word.to_lowercase() == word)
            .map(|w| w.marker.as_str())
    }

    /// 指定された記号のポインタのイテレータ。
    pub fn pointers_with(&self, symbol: PointerSymbol) -> impl Iterator<Item = &Pointer> + '_ {
        self.pointers.iter().filter(move |p| p.symbol == symbol)
    }

    #[inline(always)]
    pub(crate) const fn distance_cache(&self) -> &OnceLock<AncestorDistances> {
        &self.distances
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.pos == other.pos
            && self.words == other.words
            && self.pointers == other.pointers
            && self.gloss == other.gloss
    }
}

impl Eq for Entry {}

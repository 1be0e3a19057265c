//! 品詞の定義
//!
//! このモジュールは、データベースを分割するバケットのキーであり、
//! 各エントリのタグでもある品詞（[`PartOfSpeech`]）を提供します。

use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, WordnetError};

/// 品詞。
///
/// 名詞・動詞・形容詞・副詞の4種類に閉じた列挙型です。
/// 同じIDでも品詞が異なれば別のエントリを指します。
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum PartOfSpeech {
    /// 名詞（マーカー `n`）
    Noun,
    /// 動詞（マーカー `v`）
    Verb,
    /// 形容詞（マーカー `a`）
    Adjective,
    /// 副詞（マーカー `r`）
    Adverb,
}

impl PartOfSpeech {
    /// 検索やロードで使用される固定の走査順序。
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// ポインタ内で使われる1文字のマーカーを返します。
    #[inline(always)]
    pub const fn marker(self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::Adverb => 'r',
        }
    }

    /// 1文字のマーカーから品詞を取得します。
    ///
    /// 形容詞サテライトのマーカー `s` は形容詞として扱います。
    ///
    /// # 戻り値
    ///
    /// 未知のマーカーの場合は `None`
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' | 's' => Some(Self::Adjective),
            'r' => Some(Self::Adverb),
            _ => None,
        }
    }

    /// データファイル名 `data.<suffix>` の接尾辞を返します。
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Adverb => "adv",
        }
    }

    /// バケット配列上の位置。
    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}

impl FromStr for PartOfSpeech {
    type Err = WordnetError;

    /// `noun`/`verb`/`adj`/`adv`、英語名、または1文字マーカーを受け付けます。
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(Self::Noun),
            "v" | "verb" => Ok(Self::Verb),
            "a" | "s" | "adj" | "adjective" => Ok(Self::Adjective),
            "r" | "adv" | "adverb" => Ok(Self::Adverb),
            _ => Err(WordnetError::invalid_argument(
                "part_of_speech",
                format!("unknown part of speech: {s:?}"),
            )),
        }
    }
}

//! 関係ポインタ
//!
//! このモジュールは、シンセット間の型付き関係（[`Pointer`]）と、
//! 関係記号の固定語彙（[`POINTER_SYMBOLS`]、[`PointerSymbol`]）を提供します。

use std::fmt;

use crate::pos::PartOfSpeech;

/// 関係記号と説明の対応表。
///
/// 記号を人間が読める名前で表示したい呼び出し側のための記述的なメタデータです。
pub const POINTER_SYMBOLS: [(&str, &str); 26] = [
    ("!", "Antonym"),
    ("@", "Hypernym"),
    ("@i", "Instance Hypernym"),
    ("~", "Hyponym"),
    ("~i", "Instance Hyponym"),
    ("#m", "Member holonym"),
    ("#s", "Substance holonym"),
    ("#p", "Part holonym"),
    ("%m", "Member meronym"),
    ("%s", "Substance meronym"),
    ("%p", "Part meronym"),
    ("=", "Attribute"),
    ("+", "Derivationally related form"),
    ("*", "Entailment"),
    (">", "Cause"),
    ("^", "Also see"),
    ("$", "Verb Group"),
    ("&", "Similar to"),
    ("<", "Participle of verb"),
    (
        "\\",
        "Pertainym (pertains to noun) for adjectives, Derived from adjective for adverbs",
    ),
    (";c", "Domain of synset - TOPIC"),
    ("-c", "Member of this domain - TOPIC"),
    (";r", "Domain of synset - REGION"),
    ("-r", "Member of this domain - REGION"),
    (";u", "Domain of synset - USAGE"),
    ("-u", "Member of this domain - USAGE"),
];

/// 関係記号。
///
/// 各バリアントは [`POINTER_SYMBOLS`] の同じ位置の行に対応します。
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
#[repr(u8)]
pub enum PointerSymbol {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelated,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    ParticipleOf,
    Pertainym,
    DomainTopic,
    MemberOfDomainTopic,
    DomainRegion,
    MemberOfDomainRegion,
    DomainUsage,
    MemberOfDomainUsage,
}

impl PointerSymbol {
    /// [`POINTER_SYMBOLS`] と同じ順序の全記号。
    pub const ALL: [Self; 26] = [
        Self::Antonym,
        Self::Hypernym,
        Self::InstanceHypernym,
        Self::Hyponym,
        Self::InstanceHyponym,
        Self::MemberHolonym,
        Self::SubstanceHolonym,
        Self::PartHolonym,
        Self::MemberMeronym,
        Self::SubstanceMeronym,
        Self::PartMeronym,
        Self::Attribute,
        Self::DerivationallyRelated,
        Self::Entailment,
        Self::Cause,
        Self::AlsoSee,
        Self::VerbGroup,
        Self::SimilarTo,
        Self::ParticipleOf,
        Self::Pertainym,
        Self::DomainTopic,
        Self::MemberOfDomainTopic,
        Self::DomainRegion,
        Self::MemberOfDomainRegion,
        Self::DomainUsage,
        Self::MemberOfDomainUsage,
    ];

    /// データファイル中の記号から関係記号を取得します。
    ///
    /// # 戻り値
    ///
    /// 語彙にない記号の場合は `None`
    pub fn from_code(code: &str) -> Option<Self> {
        POINTER_SYMBOLS
            .iter()
            .position(|&(c, _)| c == code)
            .map(|i| Self::ALL[i])
    }

    /// データファイル中の記号を返します。
    #[inline(always)]
    pub const fn code(self) -> &'static str {
        POINTER_SYMBOLS[self as usize].0
    }

    /// 人間が読める説明を返します。
    #[inline(always)]
    pub const fn description(self) -> &'static str {
        POINTER_SYMBOLS[self as usize].1
    }
}

impl fmt::Display for PointerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// シンセットから別のシンセットへの型付き関係
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Pointer {
    /// 関係記号
    pub symbol: PointerSymbol,

    /// 参照先のID（オフセット）
    pub target_id: u32,

    /// 参照先の品詞マーカー（`n`/`v`/`a`/`s`/`r`）
    pub target_marker: char,

    /// 参照元・参照先の語番号（上位バイトが参照元、下位バイトが参照先）
    pub source_target: u16,
}

impl Pointer {
    /// 新しいインスタンスを作成します。
    #[inline(always)]
    pub const fn new(
        symbol: PointerSymbol,
        target_id: u32,
        target_marker: char,
        source_target: u16,
    ) -> Self {
        Self {
            symbol,
            target_id,
            target_marker,
            source_target,
        }
    }

    /// 参照先の品詞を返します。
    #[inline(always)]
    pub const fn target_part_of_speech(&self) -> Option<PartOfSpeech> {
        PartOfSpeech::from_marker(self.target_marker)
    }

    /// 参照元の語番号（1始まり、意味的ポインタの場合は0）。
    #[inline(always)]
    pub const fn source_word(&self) -> u8 {
        (self.source_target >> 8) as u8
    }

    /// 参照先の語番号（1始まり、意味的ポインタの場合は0）。
    #[inline(always)]
    pub const fn target_word(&self) -> u8 {
        (self.source_target & 0xff) as u8
    }

    /// シンセット全体の間の関係（語彙的な関係ではない）かどうか。
    #[inline(always)]
    pub const fn is_semantic(&self) -> bool {
        self.source_target == 0
    }
}

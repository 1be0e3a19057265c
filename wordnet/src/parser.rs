//! レコード行のパーサ
//!
//! `data.<pos>` ファイルの1行を [`Entry`] に変換します。行の形式は以下の通りです。
//!
//! ```text
//! offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt [ptr...] [frames...] | gloss
//! ```
//!
//! 各ポインタは `symbol offset pos source/target` の4トークンです。
//! 2個以上の空白で始まる行はライセンス等のヘッダ行で、エントリではありません。

use crate::entry::{Entry, SynsetWord};
use crate::errors::RecordError;
use crate::pointer::{Pointer, PointerSymbol};
use crate::pos::PartOfSpeech;

/// 語数フィールド `w_cnt` の基数。
///
/// WordNetのデータファイルは `w_cnt` を2桁の16進数で出力します。
pub const WORD_COUNT_RADIX: u32 = 16;

/// ポインタ数フィールド `p_cnt` の基数（3桁の10進数）。
pub const POINTER_COUNT_RADIX: u32 = 10;

/// `source/target` フィールドの基数（4桁の16進数）。
pub const SOURCE_TARGET_RADIX: u32 = 16;

/// 行がヘッダ・コメント行かどうかを判定します。
#[inline(always)]
pub fn is_comment(line: &str) -> bool {
    line.starts_with("  ")
}

/// 1行を解析します。
///
/// # 引数
///
/// * `line` - 改行を含まない1行
/// * `pos` - 行が属するバケットの品詞（行からは導出できません）
///
/// # 戻り値
///
/// エントリの場合は `Ok(Some(Entry))`、コメント行・空行の場合は `Ok(None)`。
///
/// # エラー
///
/// 宣言された語数・ポインタ数に対してトークンが不足している場合や、
/// 数値フィールドを解析できない場合に [`RecordError`] を返します。
pub fn parse_line(line: &str, pos: PartOfSpeech) -> Result<Option<Entry>, RecordError> {
    if is_comment(line) || line.trim().is_empty() {
        return Ok(None);
    }

    let (data, gloss) = match line.split_once('|') {
        Some((data, gloss)) => (data, Some(gloss.trim().to_string())),
        None => (line, None),
    };

    let mut tokens = Tokens::new(data);

    let id = tokens.number("offset", 10)?;
    tokens.next("lex_filenum")?;
    tokens.next("ss_type")?;
    let word_count = tokens.number("w_cnt", WORD_COUNT_RADIX)?;

    // Counts come from the line itself; a missing token fails below instead.
    let mut words = vec![];
    for _ in 0..word_count {
        let word = tokens.next("word")?.replace('_', " ");
        let marker = tokens.next("lex_id")?;
        words.push(SynsetWord::new(word, marker));
    }

    let pointer_count = tokens.number("p_cnt", POINTER_COUNT_RADIX)?;
    let mut pointers = vec![];
    for _ in 0..pointer_count {
        pointers.push(tokens.pointer()?);
    }

    // Verb frames may follow the pointers; they are not part of the model.
    Ok(Some(Entry::new(id, pos, words, pointers, gloss)))
}

/// 空白区切りのトークン列
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            inner: data.split_whitespace(),
        }
    }

    fn next(&mut self, field: &'static str) -> Result<&'a str, RecordError> {
        self.inner.next().ok_or(RecordError::MissingField { field })
    }

    fn number(&mut self, field: &'static str, radix: u32) -> Result<u32, RecordError> {
        let token = self.next(field)?;
        parse_number(token, field, radix)
    }

    fn pointer(&mut self) -> Result<Pointer, RecordError> {
        let code = self.next("pointer_symbol")?;
        let symbol =
            PointerSymbol::from_code(code).ok_or_else(|| RecordError::UnknownPointerSymbol {
                symbol: code.to_string(),
            })?;
        let target_id = self.number("pointer_offset", 10)?;

        let marker_token = self.next("pointer_pos")?;
        let mut chars = marker_token.chars();
        let target_marker = match (chars.next(), chars.next()) {
            (Some(c), None) if PartOfSpeech::from_marker(c).is_some() => c,
            _ => {
                return Err(RecordError::InvalidMarker {
                    token: marker_token.to_string(),
                });
            }
        };

        let source_target = self.number("source_target", SOURCE_TARGET_RADIX)?;
        let source_target =
            u16::try_from(source_target).map_err(|_| RecordError::InvalidNumber {
                field: "source_target",
                token: format!("{source_target:x}"),
            })?;

        Ok(Pointer::new(symbol, target_id, target_marker, source_target))
    }
}

fn parse_number(token: &str, field: &'static str, radix: u32) -> Result<u32, RecordError> {
    // `from_str_radix` accepts a leading '+', the data format never does.
    if !token.bytes().all(|b| (b as char).is_digit(radix)) {
        return Err(RecordError::InvalidNumber {
            field,
            token: token.to_string(),
        });
    }
    u32::from_str_radix(token, radix).map_err(|_| RecordError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

//! エラー型の定義
//!
//! このモジュールは、データベースのロードで発生するすべてのエラー型を定義します。
//! ロード完了後の問い合わせは失敗しません（該当なしは `None` や空の `Vec` で表します）。

use std::error::Error;
use std::fmt::{self, Debug};
use std::path::PathBuf;

use crate::pos::PartOfSpeech;

/// このクレート専用のResult型
///
/// エラー型としてデフォルトで[`WordnetError`]を使用します。
pub type Result<T, E = WordnetError> = std::result::Result<T, E>;

/// このクレートのエラー型
#[derive(Debug, thiserror::Error)]
pub enum WordnetError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// レコード行の構造エラー
    ///
    /// [`InvalidRecordError`]のエラーバリアント。行番号と品詞を含みます。
    #[error(transparent)]
    InvalidRecord(InvalidRecordError),

    /// ある品詞のソースが与えられなかったエラー
    #[error("No source was supplied for the {0} bucket.")]
    MissingSource(PartOfSpeech),

    /// 同じ品詞のソースが2回与えられたエラー
    #[error("The {0} bucket was supplied more than once.")]
    DuplicateSource(PartOfSpeech),

    /// データファイルが存在しないエラー
    #[error("The data file '{0}' does not exist.")]
    SourceNotFound(PathBuf),

    /// ディレクトリが指定されたエラー
    ///
    /// ファイルが期待される場所にディレクトリが指定された場合に発生します。
    #[error("The path '{0}' is a directory, but a file was expected.")]
    PathIsDirectory(PathBuf),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WordnetError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// レコード行の構造エラーを生成します
    ///
    /// # 引数
    ///
    /// * `pos` - ロード中のバケットの品詞
    /// * `line` - 1始まりの行番号
    /// * `cause` - 行の構造上の問題
    pub(crate) fn invalid_record(pos: PartOfSpeech, line: usize, cause: RecordError) -> Self {
        Self::InvalidRecord(InvalidRecordError { pos, line, cause })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// レコード行の解析に失敗した場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidRecordError {
    /// ロード中のバケットの品詞
    pub(crate) pos: PartOfSpeech,

    /// 1始まりの行番号
    pub(crate) line: usize,

    /// 行の構造上の問題
    pub(crate) cause: RecordError,
}

impl InvalidRecordError {
    /// 失敗した行のバケットの品詞を返します。
    pub const fn part_of_speech(&self) -> PartOfSpeech {
        self.pos
    }

    /// 失敗した行の番号（1始まり）を返します。
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 行の構造上の問題を返します。
    pub const fn cause(&self) -> &RecordError {
        &self.cause
    }
}

impl fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "InvalidRecordError: data.{} line {}: {}",
            self.pos, self.line, self.cause
        )
    }
}

impl Error for InvalidRecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// 1行のレコードの構造上の問題
///
/// 行番号を持たないため、ロード時に [`InvalidRecordError`] に包まれて報告されます。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// 宣言された個数に対してトークンが不足している
    #[error("missing token for field `{field}`")]
    MissingField {
        /// 不足しているフィールド名
        field: &'static str,
    },

    /// 数値フィールドを解析できない
    #[error("field `{field}` is not a valid number: {token:?}")]
    InvalidNumber {
        /// フィールド名
        field: &'static str,
        /// 解析できなかったトークン
        token: String,
    },

    /// 品詞マーカーが1文字の既知のマーカーではない
    #[error("invalid part-of-speech marker: {token:?}")]
    InvalidMarker {
        /// 解析できなかったトークン
        token: String,
    },

    /// 未知のポインタ記号
    #[error("unknown pointer symbol: {symbol:?}")]
    UnknownPointerSymbol {
        /// 解析できなかった記号
        symbol: String,
    },
}

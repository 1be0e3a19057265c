//! データファイルの所在の設定
//!
//! このモジュールは、4つの品詞のデータファイル（`data.noun`、`data.verb`、
//! `data.adj`、`data.adv`）の場所を表す [`DataSources`] を提供します。

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::errors::{Result, WordnetError};
use crate::pos::PartOfSpeech;

/// 既定のデータディレクトリのパス。
///
/// ユーザー固有のローカルデータディレクトリ内の`wordnet`サブディレクトリを指します。
/// 各プラットフォームでの標準的なデータディレクトリ:
/// - Linux: `$XDG_DATA_HOME/wordnet` または `$HOME/.local/share/wordnet`
/// - macOS: `$HOME/Library/Application Support/wordnet`
/// - Windows: `{FOLDERID_LocalAppData}/wordnet`
///
/// ディレクトリは作成しません。
pub static DEFAULT_DATA_DIR: LazyLock<Option<PathBuf>> =
    LazyLock::new(|| Some(dirs::data_local_dir()?.join("wordnet")));

/// 品詞ごとのデータファイルのパス
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSources {
    paths: [PathBuf; 4],
}

impl DataSources {
    /// ディレクトリ直下の `data.<pos>` を指す設定を作成します。
    pub fn new<P>(dir: P) -> Self
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        Self {
            paths: PartOfSpeech::ALL.map(|pos| dir.join(format!("data.{}", pos.file_suffix()))),
        }
    }

    /// [`DEFAULT_DATA_DIR`] を指す設定を作成します。
    ///
    /// # 戻り値
    ///
    /// プラットフォームのデータディレクトリが決定できない場合は `None`
    pub fn from_default_dir() -> Option<Self> {
        DEFAULT_DATA_DIR.as_ref().map(Self::new)
    }

    /// 1つの品詞のファイルのパスを置き換えます。
    pub fn with_path<P>(mut self, pos: PartOfSpeech, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.paths[pos.index()] = path.into();
        self
    }

    /// 指定された品詞のファイルのパス。
    #[inline(always)]
    pub fn path(&self, pos: PartOfSpeech) -> &Path {
        &self.paths[pos.index()]
    }

    /// `(品詞, パス)` の組のイテレータ（名詞・動詞・形容詞・副詞の順）。
    pub fn iter(&self) -> impl Iterator<Item = (PartOfSpeech, &Path)> + '_ {
        PartOfSpeech::ALL.into_iter().map(|pos| (pos, self.path(pos)))
    }

    /// すべてのファイルを検証して開きます。
    ///
    /// いずれかのファイルを開けない場合は、どのファイルも読み込まずにエラーを返します。
    ///
    /// # エラー
    ///
    /// ファイルが存在しない場合は [`WordnetError::SourceNotFound`]、
    /// ディレクトリの場合は [`WordnetError::PathIsDirectory`] を返します。
    pub fn open(&self) -> Result<Vec<(PartOfSpeech, BufReader<File>)>> {
        let mut readers = Vec::with_capacity(self.paths.len());
        for (pos, path) in self.iter() {
            if !path.exists() {
                return Err(WordnetError::SourceNotFound(path.to_path_buf()));
            }
            if path.is_dir() {
                return Err(WordnetError::PathIsDirectory(path.to_path_buf()));
            }
            log::debug!("opening {} source {}", pos, path.display());
            readers.push((pos, BufReader::new(File::open(path)?)));
        }
        Ok(readers)
    }
}

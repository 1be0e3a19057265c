//! # wordnet-graph
//!
//! WordNet形式の品詞別シンセットファイルをメモリ上に読み込み、検索、グラフ走査、
//! 意味的距離の計算を提供するライブラリです。
//!
//! ## 概要
//!
//! `data.noun`、`data.verb`、`data.adj`、`data.adv` の各行を解析して
//! 語彙エントリ（シンセット）を作成し、型付きの関係ポインタで結ばれたグラフとして保持します。
//! データベースは1回だけ構築され、その後は変更されません。
//!
//! ## 主な機能
//!
//! - **レコードパーサ**: 位置に基づくコンパクトなテキスト形式の1行を解析
//! - **検索**: IDによる参照と、大文字小文字を区別しない表層形の検索
//! - **上位語の走査**: 祖先木、祖先までの最短距離、共通祖先を経由する距離、木の高さ
//! - **類似語のサンプリング**: 関係ポインタを辿った類似シンセットの選択（乱数生成器は注入可能）
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wordnet_graph::{Database, PartOfSpeech};
//!
//! let noun = "  1 This software and database is being provided to you, the LICENSEE, by\n\
//! 00000100 05 n 01 dog 0 001 @ 00000200 n 0000 | a domesticated canine\n\
//! 00000200 03 n 01 animal 0 001 @ 00000300 n 0000 | a living organism\n\
//! 00000300 03 n 01 entity 0 000 | that which is perceived to exist\n\
//! 00000400 05 n 01 cat 0 001 @ 00000200 n 0000 | a feline";
//!
//! let db = Database::from_readers(noun.as_bytes(), &b""[..], &b""[..], &b""[..])?;
//!
//! let dog = db.find("Dog", Some(PartOfSpeech::Noun)).unwrap();
//! let cat = db.find("cat", None).unwrap();
//!
//! assert_eq!(dog.hypernyms(), [db.lookup(200, PartOfSpeech::Noun).unwrap()]);
//! assert_eq!(dog.height(), 2);
//! assert_eq!(dog.hypernym_distance_from(&cat), Some(2));
//! assert_eq!(dog.gloss(), Some("a domesticated canine"));
//! # Ok(())
//! # }
//! ```

/// 品詞の定義
pub mod pos;

/// 関係ポインタと関係記号の語彙
pub mod pointer;

/// 語彙エントリのデータモデル
pub mod entry;

/// レコード行のパーサ
pub mod parser;

/// 語彙データベースとビルダー
pub mod database;

/// データベース内のシンセットへの参照
pub mod synset;

/// 上位語グラフの走査
pub mod graph;

/// 類似シンセットのサンプリング
pub mod similarity;

/// エラー型の定義
pub mod errors;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use database::{DataSources, Database, DatabaseBuilder};
pub use entry::{Entry, SynsetWord};
pub use graph::{AncestorDistances, AncestorNode, AncestorTree, ByHeight};
pub use pointer::{POINTER_SYMBOLS, Pointer, PointerSymbol};
pub use pos::PartOfSpeech;
pub use synset::Synset;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! テスト用ユーティリティ
//!
//! テストコードで使用する便利なマクロや関数を提供します。

use crate::database::Database;

macro_rules! hashmap {
    ( $($k:expr => $v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashMap::new();
            $(
                h.insert($k, $v);
            )*
            h
        }
    };
    ( $($k:expr => $v:expr),* ) => {
        hashmap![$( $k => $v, )*]
    };
}

pub(crate) use hashmap;

/// 名詞バケットだけに行を持つデータベースを作成します。
pub(crate) fn noun_database<S>(lines: &[S]) -> Database
where
    S: AsRef<str>,
{
    let noun = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    Database::from_readers(noun.as_bytes(), &b""[..], &b""[..], &b""[..]).unwrap()
}

/// 名詞の1行を組み立てます。ポインタはすべて同じ品詞の上位語です。
pub(crate) fn noun_line(id: u32, word: &str, hypernyms: &[u32]) -> String {
    let mut line = format!("{id:08} 05 n 01 {word} 0 {:03}", hypernyms.len());
    for h in hypernyms {
        line.push_str(&format!(" @ {h:08} n 0000"));
    }
    line.push_str(&format!(" | gloss of {word}"));
    line
}

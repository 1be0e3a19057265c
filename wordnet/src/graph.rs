//! 上位語グラフの走査
//!
//! このモジュールは、上位語（`@`）ポインタがなす有向グラフ上の走査結果を提供します。
//!
//! - [`AncestorTree`]: 祖先を木として展開したもの
//! - [`AncestorDistances`]: 祖先までの最短辺数
//! - [`ByHeight`]: 木の高さ（一般性）による順序付け
//!
//! グラフは整形式のデータでは非巡回ですが、それは保証されないため、
//! いずれの走査も訪問済み集合またはパスガードを持ち、再帰呼び出しは行いません。

mod distance;
mod tree;

use std::cmp::Ordering;

use crate::synset::Synset;

pub use crate::graph::distance::AncestorDistances;
pub use crate::graph::tree::{AncestorNode, AncestorTree};

/// 上位語木の高さによる順序付けのためのラッパー
///
/// 高さが等しい2つのシンセットは、別のシンセットであっても等しいとみなされます。
/// [`Synset`] 自体の等価性（同一性）はそのままにしておくため、別の型としています。
///
/// # 例
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use wordnet_graph::{ByHeight, Database, PartOfSpeech};
///
/// let noun = "00000100 05 n 01 dog 0 001 @ 00000200 n 0000 | a canine\n\
///             00000200 03 n 01 animal 0 000 | a living organism";
/// let db = Database::from_readers(noun.as_bytes(), &b""[..], &b""[..], &b""[..])?;
///
/// let mut synsets: Vec<_> = db.iter(PartOfSpeech::Noun).map(ByHeight).collect();
/// synsets.sort();
/// assert_eq!(synsets[0].0.id(), 200);
/// assert_eq!(synsets[1].0.id(), 100);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByHeight<'db>(pub Synset<'db>);

impl PartialEq for ByHeight<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByHeight<'_> {}

impl PartialOrd for ByHeight<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByHeight<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_height(&other.0)
    }
}

//! データベース内のシンセットへの参照
//!
//! [`Synset`] は [`Database`] と [`Entry`] の組への軽量な参照で、
//! ポインタの解決やグラフ走査はすべてこの型を通じて行います。

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::database::Database;
use crate::entry::Entry;
use crate::graph::{AncestorDistances, AncestorTree};
use crate::pointer::PointerSymbol;
use crate::pos::PartOfSpeech;

/// データベース内のシンセット
///
/// [`Database`] が生存している間のみ有効です。等価性は参照先の
/// エントリの同一性で判定します。同じバケットでIDが重複した行は、
/// IDが等しくても別のシンセットです。
#[derive(Clone, Copy)]
pub struct Synset<'db> {
    db: &'db Database,
    entry: &'db Entry,
}

impl<'db> Synset<'db> {
    #[inline(always)]
    pub(crate) const fn new(db: &'db Database, entry: &'db Entry) -> Self {
        Self { db, entry }
    }

    /// このシンセットのエントリ。
    #[inline(always)]
    pub const fn entry(&self) -> &'db Entry {
        self.entry
    }

    /// このシンセットを含むデータベース。
    #[inline(always)]
    pub const fn database(&self) -> &'db Database {
        self.db
    }

    /// 直接の上位語。
    ///
    /// 上位語ポインタの参照先を同じ品詞のバケットで解決します。
    /// 解決できない参照先は黙って除外され、残りはポインタの順序を保ちます。
    pub fn hypernyms(&self) -> Vec<Synset<'db>> {
        self.related(PointerSymbol::Hypernym)
    }

    /// 直接の下位語。
    pub fn hyponyms(&self) -> Vec<Synset<'db>> {
        self.related(PointerSymbol::Hyponym)
    }

    /// 指定された記号のポインタの参照先を、同じ品詞のバケットで解決します。
    pub fn related(&self, symbol: PointerSymbol) -> Vec<Synset<'db>> {
        self.entry
            .pointers_with(symbol)
            .filter_map(|p| self.resolve(p.target_id, self.part_of_speech()))
            .collect()
    }

    /// 指定された記号のポインタの参照先を、各ポインタの品詞マーカーが示す
    /// バケットで解決します。品詞をまたぐ関係（派生語など）に使用します。
    pub fn pointer_targets(&self, symbol: PointerSymbol) -> Vec<Synset<'db>> {
        self.entry
            .pointers_with(symbol)
            .filter_map(|p| self.resolve(p.target_id, p.target_part_of_speech()?))
            .collect()
    }

    fn resolve(&self, id: u32, pos: PartOfSpeech) -> Option<Synset<'db>> {
        let target = self.db.lookup(id, pos);
        if target.is_none() {
            log::debug!("dangling pointer from {} to {}:{:08}", self, pos, id);
        }
        target
    }

    /// 上位語の祖先木を構築します。
    ///
    /// 根からのパス上で同じIDに再び到達した枝はそこで打ち切られるため、
    /// 巡回を含むデータでも停止します。
    pub fn hypernym_ancestors(&self) -> AncestorTree<'db> {
        AncestorTree::build(*self)
    }

    /// 各祖先までの最短辺数。
    ///
    /// 結果はシンセットごとに1回だけ計算され、以後は同じ値を返します。
    /// 複数のスレッドから同時に呼び出しても安全です。
    pub fn hypernym_ancestor_distances(&self) -> &'db AncestorDistances {
        self.entry
            .distance_cache()
            .get_or_init(|| AncestorDistances::compute(*self))
    }

    /// 共通の上位語を経由する最短の経路長。
    ///
    /// 共通の祖先がない場合（品詞が異なる場合を含む）は `None` を返します。
    pub fn hypernym_distance_from(&self, other: &Synset<'_>) -> Option<u32> {
        if self.part_of_speech() != other.part_of_speech() {
            return None;
        }
        self.hypernym_ancestor_distances()
            .shortest_common_path(other.hypernym_ancestor_distances())
    }

    /// 祖先木の高さ。上位語がなければ0です。
    pub fn height(&self) -> usize {
        self.hypernym_ancestors().height()
    }

    /// 祖先木の高さで比較します。高さが等しければ `Equal` です。
    pub fn cmp_height(&self, other: &Synset<'_>) -> Ordering {
        self.height().cmp(&other.height())
    }
}

impl Deref for Synset<'_> {
    type Target = Entry;

    fn deref(&self) -> &Entry {
        self.entry
    }
}

impl PartialEq for Synset<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.entry, other.entry)
    }
}

impl Eq for Synset<'_> {}

impl fmt::Display for Synset<'_> {
    /// `#<Entry::<id>[<pos>] ["word", ...]>` の形式で出力します。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Entry::{}[{}] [", self.id(), self.part_of_speech())?;
        for (i, w) in self.words().iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", w.word)?;
        }
        f.write_str("]>")
    }
}

impl fmt::Debug for Synset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

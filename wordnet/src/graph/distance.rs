//! 祖先までの最短距離

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::synset::Synset;

/// シンセットから各祖先までの最短辺数
///
/// 起点のシンセット自身は距離0で常に含まれます。
/// キーは起点と同じ品詞バケット内のIDです。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AncestorDistances {
    map: HashMap<u32, u32>,
}

impl AncestorDistances {
    /// 上位語ポインタを幅優先で辿り、最短距離を計算します。
    ///
    /// 各IDは最初に到達した時点（最短）で確定し、再訪はしないため、
    /// 巡回を含むグラフでも停止します。
    pub(crate) fn compute(start: Synset<'_>) -> Self {
        let mut map = HashMap::new();
        map.insert(start.id(), 0);

        let mut queue = VecDeque::new();
        queue.push_back((start, 0));
        while let Some((synset, distance)) = queue.pop_front() {
            for hypernym in synset.hypernyms() {
                if !map.contains_key(&hypernym.id()) {
                    map.insert(hypernym.id(), distance + 1);
                    queue.push_back((hypernym, distance + 1));
                }
            }
        }

        Self { map }
    }

    /// 指定されたIDの祖先までの距離。
    #[inline(always)]
    pub fn get(&self, id: u32) -> Option<u32> {
        self.map.get(&id).copied()
    }

    /// 指定されたIDが祖先（または起点）かどうか。
    #[inline(always)]
    pub fn contains(&self, id: u32) -> bool {
        self.map.contains_key(&id)
    }

    /// 起点を含む祖先の数。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// 常に起点を含むため、計算結果が空になることはありません。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// `(id, distance)` の組のイテレータ（順序は不定）。
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.map.iter().map(|(&id, &d)| (id, d))
    }

    #[cfg(test)]
    pub(crate) const fn as_map(&self) -> &HashMap<u32, u32> {
        &self.map
    }

    /// 共通の祖先を経由する最短の経路長を返します。
    ///
    /// 共通部分の各IDについて `self[id] + other[id]` の最小値を取ります。
    /// 共通部分が空の場合は `None` を返します。
    pub fn shortest_common_path(&self, other: &Self) -> Option<u32> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .map
            .iter()
            .filter_map(|(id, d)| large.map.get(id).map(|e| d + e))
            .min()
    }
}

impl std::ops::Index<u32> for AncestorDistances {
    type Output = u32;

    fn index(&self, id: u32) -> &u32 {
        &self.map[&id]
    }
}

//! 類似シンセットのサンプリング

use rand::Rng;
use rand::seq::SliceRandom;

use crate::pointer::PointerSymbol;
use crate::synset::Synset;

/// 類似語の候補から除外する関係記号。
///
/// 反意語は「似ている」とはみなしません。
pub const EXCLUDED_SIMILARITY_SYMBOLS: &[PointerSymbol] = &[PointerSymbol::Antonym];

impl<'db> Synset<'db> {
    /// 類似語の候補を返します。
    ///
    /// 参照先の品詞マーカーがこのシンセットのマーカーと一致し、記号が
    /// [`EXCLUDED_SIMILARITY_SYMBOLS`] に含まれないポインタの参照先に、
    /// このシンセット自身を加えたものです。解決できない参照先は除外されます。
    pub fn similarity_candidates(&self) -> Vec<Synset<'db>> {
        let pos = self.part_of_speech();
        let marker = pos.marker();
        let db = self.database();

        let mut candidates: Vec<_> = self
            .pointers()
            .iter()
            .filter(|p| {
                p.target_marker == marker && !EXCLUDED_SIMILARITY_SYMBOLS.contains(&p.symbol)
            })
            .filter_map(|p| db.lookup(p.target_id, pos))
            .collect();
        candidates.push(*self);
        candidates
    }

    /// このシンセットに類似した（このシンセット自身の場合もある）シンセットを返します。
    ///
    /// 候補（[`similarity_candidates`](Self::similarity_candidates)）から一様に選びます。
    /// 乱数生成器は呼び出し側が与えるため、シード付きの生成器を使えば結果は再現可能です。
    ///
    /// # 例
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordnet_graph::{Database, PartOfSpeech};
    ///
    /// let noun = "00000100 05 n 01 dog 0 001 ! 00000200 n 0000 | a canine\n\
    ///             00000200 05 n 01 cat 0 000 | a feline";
    /// let db = Database::from_readers(noun.as_bytes(), &b""[..], &b""[..], &b""[..])?;
    ///
    /// let dog = db.find("dog", Some(PartOfSpeech::Noun)).unwrap();
    /// let mut rng = StdRng::seed_from_u64(0);
    /// // Antonyms are never candidates.
    /// assert_eq!(dog.similar_word(&mut rng), dog);
    /// # Ok(())
    /// # }
    /// ```
    pub fn similar_word<R>(&self, rng: &mut R) -> Synset<'db>
    where
        R: Rng + ?Sized,
    {
        let candidates = self.similarity_candidates();
        candidates.choose(rng).copied().unwrap_or(*self)
    }
}

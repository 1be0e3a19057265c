use crate::pointer::PointerSymbol;
use crate::pos::PartOfSpeech;
use crate::test_utils::{noun_database, noun_line};

use super::fixture_database;

const ENTITY: u32 = 1740;
const ANIMAL: u32 = 15388;
const DOG: u32 = 2084071;
const CAT: u32 = 2121620;

#[test]
fn test_hypernym_of_synthetic_dog() {
    let db = noun_database(&[noun_line(100, "dog", &[200]), noun_line(200, "animal", &[])]);
    let dog = db.lookup(100, PartOfSpeech::Noun).unwrap();
    let animal = db.lookup(200, PartOfSpeech::Noun).unwrap();

    assert_eq!(dog.hypernyms(), [animal]);
    assert!(animal.hypernyms().is_empty());
    assert_eq!(dog.height(), 1);
    assert_eq!(animal.height(), 0);
}

#[test]
fn test_dangling_hypernym_is_omitted() {
    let db = noun_database(&[noun_line(100, "dog", &[999, 200]), noun_line(200, "animal", &[])]);
    let dog = db.lookup(100, PartOfSpeech::Noun).unwrap();
    assert_eq!(dog.hypernyms(), [db.lookup(200, PartOfSpeech::Noun).unwrap()]);

    let db = noun_database(&[noun_line(100, "dog", &[999])]);
    let dog = db.lookup(100, PartOfSpeech::Noun).unwrap();
    assert!(dog.hypernyms().is_empty());
    assert_eq!(dog.height(), 0);
    assert_eq!(dog.hypernym_ancestor_distances().len(), 1);
}

#[test]
fn test_fixture_counts() {
    let db = fixture_database();
    assert_eq!(db.num_entries(PartOfSpeech::Noun), 12);
    assert_eq!(db.num_entries(PartOfSpeech::Verb), 2);
    assert_eq!(db.num_entries(PartOfSpeech::Adjective), 4);
    assert_eq!(db.num_entries(PartOfSpeech::Adverb), 2);
    assert_eq!(db.len(), 20);
}

#[test]
fn test_ids_are_per_part_of_speech() {
    let db = fixture_database();
    let entity = db.lookup(ENTITY, PartOfSpeech::Noun).unwrap();
    let able = db.lookup(ENTITY, PartOfSpeech::Adjective).unwrap();
    let a_cappella = db.lookup(ENTITY, PartOfSpeech::Adverb).unwrap();

    assert!(entity.contains_word("entity"));
    assert!(able.contains_word("able"));
    assert!(a_cappella.contains_word("a cappella"));
    assert_ne!(entity, able);
    assert!(db.lookup(ENTITY, PartOfSpeech::Verb).is_none());
}

#[test]
fn test_search_is_case_insensitive() {
    let db = fixture_database();
    let upper = db.search("DOG", None);
    let lower = db.search("dog", None);
    assert_eq!(upper, lower);

    let found: Vec<_> = upper.iter().map(|s| (s.part_of_speech(), s.id())).collect();
    assert_eq!(
        found,
        [(PartOfSpeech::Noun, DOG), (PartOfSpeech::Verb, 2001858)]
    );

    let canis = db.search("canis familiaris", Some(PartOfSpeech::Noun));
    assert_eq!(canis.len(), 1);
    assert_eq!(canis[0].id(), DOG);
}

#[test]
fn test_search_restricted_to_part_of_speech() {
    let db = fixture_database();
    assert!(db.search("dog", Some(PartOfSpeech::Adverb)).is_empty());
    assert_eq!(db.find("dog", Some(PartOfSpeech::Verb)).unwrap().id(), 2001858);
    assert!(db.find("unicorn", None).is_none());
}

#[test]
fn test_search_returns_file_order() {
    let db = fixture_database();
    let ids: Vec<_> = db.search("hotdog", None).iter().map(|s| s.id()).collect();
    assert_eq!(ids, [7697537]);
    let ids: Vec<_> = db.search("frankfurter", None).iter().map(|s| s.id()).collect();
    assert_eq!(ids, [7676602]);
}

#[test]
fn test_fixture_entry_fields() {
    let db = fixture_database();
    let dog = db.lookup(DOG, PartOfSpeech::Noun).unwrap();

    let words: Vec<_> = dog.words().iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, ["dog", "domestic dog", "Canis familiaris"]);
    assert_eq!(dog.pointers().len(), 4);
    assert!(dog.gloss().unwrap().starts_with("a member of the genus Canis"));
    assert!(dog.gloss().unwrap().ends_with("\"the dog barked all night\""));
    assert_eq!(
        dog.to_string(),
        "#<Entry::2084071[noun] [\"dog\", \"domestic dog\", \"Canis familiaris\"]>"
    );
}

#[test]
fn test_fixture_hypernyms_and_hyponyms() {
    let db = fixture_database();
    let dog = db.lookup(DOG, PartOfSpeech::Noun).unwrap();
    let animal = db.lookup(ANIMAL, PartOfSpeech::Noun).unwrap();

    assert_eq!(dog.hypernyms(), [animal]);

    let hyponyms: Vec<_> = animal.hyponyms().iter().map(|s| s.id()).collect();
    assert_eq!(hyponyms, [DOG, CAT]);

    let entity = db.lookup(ENTITY, PartOfSpeech::Noun).unwrap();
    let hyponyms: Vec<_> = entity.hyponyms().iter().map(|s| s.id()).collect();
    assert_eq!(hyponyms, [1930, 2137, 4431553]);
}

#[test]
fn test_cross_part_of_speech_targets() {
    let db = fixture_database();
    let dog = db.lookup(DOG, PartOfSpeech::Noun).unwrap();
    let chase = db.lookup(2001858, PartOfSpeech::Verb).unwrap();

    assert_eq!(
        dog.pointer_targets(PointerSymbol::DerivationallyRelated),
        [chase]
    );
    assert_eq!(
        chase.pointer_targets(PointerSymbol::DerivationallyRelated),
        [dog]
    );
    // Same-bucket resolution cannot see the verb.
    assert!(dog.related(PointerSymbol::DerivationallyRelated).is_empty());

    let p = dog
        .pointers_with(PointerSymbol::DerivationallyRelated)
        .next()
        .unwrap();
    assert_eq!(p.source_word(), 1);
    assert_eq!(p.target_word(), 2);
    assert!(!p.is_semantic());
}

#[test]
fn test_fixture_heights() {
    let db = fixture_database();
    let noun = |id| db.lookup(id, PartOfSpeech::Noun).unwrap();

    assert_eq!(noun(ENTITY).height(), 0);
    assert_eq!(noun(ANIMAL).height(), 4);
    assert_eq!(noun(DOG).height(), 5);
    assert_eq!(noun(2085374).height(), 6);
    assert_eq!(noun(CAT).height(), 5);
    assert_eq!(noun(7697537).height(), 1);
}

#[test]
fn test_fixture_distances() {
    let db = fixture_database();
    let noun = |id| db.lookup(id, PartOfSpeech::Noun).unwrap();

    assert_eq!(noun(DOG).hypernym_distance_from(&noun(CAT)), Some(2));
    assert_eq!(noun(2085374).hypernym_distance_from(&noun(CAT)), Some(3));
    assert_eq!(noun(DOG).hypernym_distance_from(&noun(2137)), Some(6));
    assert_eq!(noun(DOG).hypernym_distance_from(&noun(ANIMAL)), Some(1));
    assert_eq!(noun(DOG).hypernym_distance_from(&noun(7697537)), None);

    let distances = noun(DOG).hypernym_ancestor_distances();
    assert_eq!(distances.get(DOG), Some(0));
    assert_eq!(distances.get(ANIMAL), Some(1));
    assert_eq!(distances.get(ENTITY), Some(5));
    assert_eq!(distances.get(99999999), None);
    assert_eq!(distances.len(), 6);
}

#[test]
fn test_distance_across_parts_of_speech() {
    let db = fixture_database();
    let dog = db.lookup(DOG, PartOfSpeech::Noun).unwrap();
    let chase = db.lookup(2001858, PartOfSpeech::Verb).unwrap();
    assert_eq!(dog.hypernym_distance_from(&chase), None);

    let entity = db.lookup(ENTITY, PartOfSpeech::Noun).unwrap();
    let able = db.lookup(ENTITY, PartOfSpeech::Adjective).unwrap();
    assert_eq!(entity.hypernym_distance_from(&able), None);
}

#[test]
fn test_shortest_of_several_paths() {
    // 400 reaches 100 directly and through 300 -> 200 -> 100.
    let db = noun_database(&[
        noun_line(100, "root", &[]),
        noun_line(200, "middle", &[100]),
        noun_line(300, "lower", &[200]),
        noun_line(400, "leaf", &[300, 100]),
        noun_line(500, "other", &[100]),
    ]);
    let noun = |id| db.lookup(id, PartOfSpeech::Noun).unwrap();

    let distances = noun(400).hypernym_ancestor_distances();
    assert_eq!(distances.get(100), Some(1));
    assert_eq!(distances.get(200), Some(2));
    assert_eq!(noun(400).hypernym_distance_from(&noun(500)), Some(2));
    // The tree keeps every path; its height follows the longest one.
    assert_eq!(noun(400).height(), 3);
    assert_eq!(noun(400).hypernym_ancestors().len(), 5);
}

#[test]
fn test_ancestor_tree_display() {
    let db = noun_database(&[
        noun_line(100, "dog", &[200]),
        noun_line(200, "animal", &[300]),
        noun_line(300, "entity", &[]),
    ]);
    let dog = db.lookup(100, PartOfSpeech::Noun).unwrap();
    assert_eq!(
        dog.hypernym_ancestors().to_string(),
        "#<Entry::100[noun] [\"dog\"]>\n  \
         #<Entry::200[noun] [\"animal\"]>\n    \
         #<Entry::300[noun] [\"entity\"]>\n"
    );
}

#[test]
fn test_height_ordering() {
    use crate::graph::ByHeight;

    let db = fixture_database();
    let mut nouns: Vec<_> = db.iter(PartOfSpeech::Noun).map(ByHeight).collect();
    nouns.sort();
    let heights: Vec<_> = nouns.iter().map(|s| s.0.height()).collect();
    assert!(heights.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(nouns.last().unwrap().0.id(), 2085374);

    let noun = |id| db.lookup(id, PartOfSpeech::Noun).unwrap();
    assert!(noun(DOG).cmp_height(&noun(CAT)).is_eq());
    assert!(noun(ENTITY).cmp_height(&noun(DOG)).is_lt());
    assert_eq!(ByHeight(noun(DOG)), ByHeight(noun(CAT)));
    assert_ne!(noun(DOG), noun(CAT));
}

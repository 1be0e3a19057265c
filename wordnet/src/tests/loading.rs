//! データファイルからの読み込みに関するテスト
//!
//! 一時ディレクトリに `data.<pos>` ファイルを書き出し、[`DataSources`] 経由の
//! 読み込みとエラー報告を検証します。

use std::fs;
use std::path::Path;

use tempfile::{TempDir, tempdir};

use crate::database::{DataSources, Database};
use crate::errors::{RecordError, WordnetError};
use crate::pos::PartOfSpeech;

use super::{DATA_ADJ, DATA_ADV, DATA_NOUN, DATA_VERB};

fn write_fixture(dir: &Path) {
    fs::write(dir.join("data.noun"), DATA_NOUN).unwrap();
    fs::write(dir.join("data.verb"), DATA_VERB).unwrap();
    fs::write(dir.join("data.adj"), DATA_ADJ).unwrap();
    fs::write(dir.join("data.adv"), DATA_ADV).unwrap();
}

fn fixture_dir() -> TempDir {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    dir
}

#[test]
fn test_load_from_directory() {
    let dir = fixture_dir();
    let db = Database::from_sources(&DataSources::new(dir.path())).unwrap();

    assert_eq!(db.len(), 20);
    assert_eq!(db.find("dog", None).unwrap().id(), 2084071);
    assert_eq!(db.find("chase", None).unwrap().part_of_speech(), PartOfSpeech::Verb);
}

#[test]
fn test_load_with_overridden_path() {
    let dir = fixture_dir();
    let verbs = dir.path().join("verbs.txt");
    fs::rename(dir.path().join("data.verb"), &verbs).unwrap();

    let sources = DataSources::new(dir.path()).with_path(PartOfSpeech::Verb, &verbs);
    let db = Database::from_sources(&sources).unwrap();
    assert_eq!(db.num_entries(PartOfSpeech::Verb), 2);
}

#[test]
fn test_missing_file() {
    let dir = fixture_dir();
    fs::remove_file(dir.path().join("data.adj")).unwrap();

    let err = Database::from_sources(&DataSources::new(dir.path())).unwrap_err();
    match err {
        WordnetError::SourceNotFound(path) => assert_eq!(path, dir.path().join("data.adj")),
        e => panic!("unexpected error: {e}"),
    }
}

#[test]
fn test_path_is_directory() {
    let dir = fixture_dir();
    fs::remove_file(dir.path().join("data.adv")).unwrap();
    fs::create_dir(dir.path().join("data.adv")).unwrap();

    let err = Database::from_sources(&DataSources::new(dir.path())).unwrap_err();
    assert!(matches!(err, WordnetError::PathIsDirectory(_)));
    assert!(err.to_string().contains("data.adv"));
}

#[test]
fn test_malformed_file_reports_line() {
    let dir = fixture_dir();
    let mut noun = DATA_NOUN.to_string();
    noun.push_str("00009999 03 n 01 broken 0 001 @ 00001740 x 0000 | bad marker\n");
    fs::write(dir.path().join("data.noun"), noun).unwrap();

    let err = Database::from_sources(&DataSources::new(dir.path())).unwrap_err();
    let WordnetError::InvalidRecord(e) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(e.part_of_speech(), PartOfSpeech::Noun);
    assert_eq!(e.line(), 15);
    assert_eq!(
        e.cause(),
        &RecordError::InvalidMarker {
            token: "x".to_string()
        }
    );
    assert!(err.to_string().contains("data.noun line 15"));
}

#[test]
fn test_unknown_pointer_symbol_fails_load() {
    let noun = "00000100 05 n 01 dog 0 001 ?? 00000200 n 0000 | a canine";
    let err = Database::from_readers(noun.as_bytes(), &b""[..], &b""[..], &b""[..]).unwrap_err();
    let WordnetError::InvalidRecord(e) = err else {
        panic!("unexpected error");
    };
    assert_eq!(
        e.cause(),
        &RecordError::UnknownPointerSymbol {
            symbol: "??".to_string()
        }
    );
}

#[test]
fn test_load_from_pairs() {
    let sources = [
        (PartOfSpeech::Adverb, DATA_ADV.as_bytes()),
        (PartOfSpeech::Noun, DATA_NOUN.as_bytes()),
        (PartOfSpeech::Adjective, DATA_ADJ.as_bytes()),
        (PartOfSpeech::Verb, DATA_VERB.as_bytes()),
    ];
    let db = Database::load(sources).unwrap();
    assert_eq!(db.len(), 20);

    let err = Database::load([(PartOfSpeech::Noun, DATA_NOUN.as_bytes())]).unwrap_err();
    assert!(matches!(err, WordnetError::MissingSource(PartOfSpeech::Verb)));
}

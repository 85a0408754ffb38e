// Notation IME: conversion and dictionary search

use scorebox_wasm::{convert_to_abc, MemoryPages, NotationDictionary, ScoreboxConfig};

async fn loaded_dictionary() -> NotationDictionary {
    let source = MemoryPages::new()
        .add("abcdict", "twinkle", "twinkle\ncode:twinkle.abc\n CDEC...")
        .add("abcdict", "twinkle2", "twinkle2\ncode:twinkle2.abc\n EFGE...")
        .add("abcdict", "^c major", "^c major\ncode:cs.abc\n ^C^D^EF")
        .add("abcdict", "notes", "notes\nno notation here");
    let mut dictionary = NotationDictionary::new(ScoreboxConfig::default());
    dictionary.load(&source).await.expect("dictionary should load");
    dictionary
}

#[tokio::test]
async fn test_twinkle_scenario() {
    let dictionary = loaded_dictionary().await;
    assert_eq!(
        dictionary.search("twin"),
        vec!["CDEC...".to_string(), "EFGE...".to_string()]
    );
}

#[tokio::test]
async fn test_empty_input_has_no_candidates() {
    let dictionary = loaded_dictionary().await;
    assert!(dictionary.search("").is_empty());
}

#[tokio::test]
async fn test_converted_key_searches_titles() {
    let dictionary = loaded_dictionary().await;
    assert_eq!(
        dictionary.search("ド♯"),
        vec!["^c".to_string(), "^C^D^EF".to_string()]
    );
}

#[tokio::test]
async fn test_first_candidate_is_conversion_when_present() {
    let dictionary = loaded_dictionary().await;
    for input in ["ドレミ", "c♯", "ド♯", "twin", "ソ", "xyz"] {
        let candidates = dictionary.search(input);
        match convert_to_abc(input) {
            Some(converted) => assert_eq!(candidates.first(), Some(&converted)),
            None => assert!(candidates.iter().all(|c| c != input)),
        }
    }
}

#[test]
fn test_conversion_examples() {
    assert_eq!(convert_to_abc("ドレミ").as_deref(), Some("cde"));
    assert_eq!(convert_to_abc("c♯").as_deref(), Some("^c"));
    assert_eq!(convert_to_abc("ド♯").as_deref(), Some("^c"));
    assert_eq!(convert_to_abc("ソ♮ファ＃"), Some("=g^f".to_string()));
}

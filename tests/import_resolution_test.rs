// Import resolution across pages and projects, through the public API

use scorebox_wasm::{FetchError, ImportResolver, MemoryPages, ResolveError, ScoreboxConfig};

fn wiki() -> MemoryPages {
    MemoryPages::new()
        .add("home", "otherpage", "otherpage\ncode:otherpage.abc\n CDEF")
        .add("home", "verse", "verse\ncode:verse.abc\n X:1\n %import:shared/rhythm\n K:G")
        .add("shared", "rhythm", "rhythm\n prose line\ncode:rhythm.abc\n %import:pulse")
        .add("shared", "pulse", "pulse\ncode:pulse.abc\n z4|")
        .add("home", "ping", "ping\ncode:ping.abc\n %import:pong")
        .add("home", "pong", "pong\ncode:pong.abc\n %import:ping")
}

#[tokio::test]
async fn test_non_directive_text_round_trips() {
    let resolver = ImportResolver::new(wiki());
    for text in ["", "CDEF", "X:1\nK:C\nCDEF|\n\n", "% comment only"] {
        let resolved = resolver.resolve(text, "home").await.unwrap();
        assert_eq!(resolved, text.trim_end_matches('\n'));
    }
    assert!(resolver.source().requests().is_empty());
}

#[tokio::test]
async fn test_import_scenario_from_home() {
    let resolver = ImportResolver::new(wiki());
    let resolved = resolver.resolve("%import:otherpage", "home").await.unwrap();

    assert_eq!(resolved, "CDEF");
    assert_eq!(resolver.cached("home/otherpage"), Some("CDEF".to_string()));
}

#[tokio::test]
async fn test_repeat_resolution_fetches_once() {
    let resolver = ImportResolver::new(wiki());
    let first = resolver.resolve("%import:verse", "home").await.unwrap();
    let requests_after_first = resolver.source().requests().len();
    let second = resolver.resolve("%import:verse", "home").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(resolver.source().requests().len(), requests_after_first);
}

#[tokio::test]
async fn test_nested_bare_reference_stays_in_imported_project() {
    let resolver = ImportResolver::new(wiki());
    let resolved = resolver.resolve("%import:verse", "home").await.unwrap();

    assert_eq!(resolved, "X:1\nz4|\nK:G");
    assert!(resolver.cached("shared/pulse").is_some());
    assert!(resolver.cached("home/pulse").is_none());
}

#[tokio::test]
async fn test_mutual_imports_fail_as_cycle() {
    let resolver = ImportResolver::new(wiki());
    let err = resolver.resolve("%import:ping", "home").await.unwrap_err();

    match err {
        ResolveError::CyclicImport { key, path } => {
            assert_eq!(key, "home/ping");
            assert_eq!(path, vec!["home/ping", "home/pong", "home/ping"]);
        }
        other => panic!("Expected cyclic import, got {:?}", other),
    }
    assert_eq!(resolver.cache_len(), 0);
}

#[tokio::test]
async fn test_same_import_twice_in_one_block_is_not_a_cycle() {
    let resolver = ImportResolver::new(wiki());
    let resolved = resolver
        .resolve("%import:otherpage\n%import:otherpage", "home")
        .await
        .unwrap();
    assert_eq!(resolved, "CDEF\nCDEF");
    assert_eq!(resolver.source().request_count("code"), 1);
}

#[tokio::test]
async fn test_custom_notation_extension() {
    let source = MemoryPages::new().add("home", "song", "song\ncode:song.abc\n CDEF\ncode:song.abc2\n GABc");
    let config = ScoreboxConfig {
        notation_extension: ".abc2".to_string(),
        ..ScoreboxConfig::default()
    };
    let resolver = ImportResolver::with_config(source, config);
    assert_eq!(resolver.resolve("%import:song", "home").await.unwrap(), "GABc");
}

#[tokio::test]
async fn test_code_fetch_error_aborts_resolution() {
    let source = wiki().fail_code("shared", "pulse", 503, "Service Unavailable");
    let resolver = ImportResolver::new(source);
    let err = resolver.resolve("%import:verse", "home").await.unwrap_err();

    match err {
        ResolveError::Fetch(FetchError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("Expected fetch status error, got {:?}", other),
    }
    assert_eq!(resolver.source().request_count("lines"), 3);
    assert_eq!(resolver.cache_len(), 0);
}

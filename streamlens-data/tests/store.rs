use std::fs;
use std::io::Write;
use std::time::Duration;

use streamlens_data::{DataError, TitleStore, loader};

const HEADER: &str = "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description";

fn write_csv(path: &std::path::Path, rows: &[&str]) {
    let mut file = fs::File::create(path).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
}

#[test]
fn loads_from_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("titles.csv");
    write_csv(
        &csv,
        &[
            "s1,Movie,A,,,USA,,2020,,,Drama,",
            "s2,TV Show,B,,,USA,,2021,,,Comedy,",
        ],
    );

    let store = TitleStore::new(csv);
    assert!(!store.is_loaded());

    let titles = store.titles().unwrap();
    assert_eq!(titles.len(), 2);
    assert!(store.is_loaded());
}

#[test]
fn second_call_returns_cached_data() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("titles.csv");
    write_csv(&csv, &["s1,Movie,A,,,USA,,2020,,,Drama,"]);

    let store = TitleStore::new(csv.clone());
    assert_eq!(store.titles().unwrap().len(), 1);

    // Replace the file entirely; a re-read would see three rows
    write_csv(
        &csv,
        &[
            "s1,Movie,A,,,USA,,2020,,,Drama,",
            "s2,Movie,B,,,USA,,2020,,,Drama,",
            "s3,Movie,C,,,USA,,2020,,,Drama,",
        ],
    );
    assert_eq!(store.titles().unwrap().len(), 1);

    // Deleting the file doesn't matter either once cached
    fs::remove_file(&csv).unwrap();
    assert_eq!(store.titles().unwrap().len(), 1);
}

#[test]
fn cached_calls_return_the_same_slice() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("titles.csv");
    write_csv(&csv, &["s1,Movie,A,,,USA,,2020,,,Drama,"]);

    let store = TitleStore::new(csv);
    let first = store.titles().unwrap();
    let second = store.titles().unwrap();
    assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
}

#[test]
fn fallback_failure_reports_every_attempt() {
    // Loopback port 9 (discard) refuses connections immediately
    let sources = &[
        "http://127.0.0.1:9/first.csv",
        "http://127.0.0.1:9/second.csv",
    ];

    let err = loader::fetch_remote(sources, Duration::from_secs(2)).unwrap_err();
    match err {
        DataError::Unavailable { attempts, summary } => {
            assert_eq!(attempts.len(), 2);
            assert_eq!(attempts[0].source, sources[0]);
            assert_eq!(attempts[1].source, sources[1]);
            assert!(summary.contains("all 2 sources failed"));
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn empty_source_list_is_unavailable() {
    let err = loader::fetch_remote(&[], Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, DataError::Unavailable { .. }));
}

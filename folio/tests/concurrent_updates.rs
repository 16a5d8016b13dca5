//! Concurrent update tests.
//!
//! Many threads race to update pages through one shared [`Wiki`]. For a
//! single key, every racer presents the same token, so exactly one may
//! win; the rest must see a conflict and nothing may be lost or torn.
//! Racers on different keys must all succeed.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use common::{open_at, open_wiki, BACKENDS};
use folio::config::Backend;
use folio::{Error, Wiki};

const RACERS: usize = 8;

fn race_same_key(wiki: &Arc<Wiki>, expected: Option<i64>) -> Vec<folio::Result<folio::Page>> {
    let barrier = Arc::new(Barrier::new(RACERS));

    let handles: Vec<_> = (0..RACERS)
        .map(|i| {
            let wiki = Arc::clone(wiki);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                wiki.update("race/page", expected, &format!("Racer {i}"), &format!("body {i}"))
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_same_key_creation_exactly_one_wins() {
    for backend in BACKENDS {
        let (_temp, wiki) = open_wiki(backend);
        let wiki = Arc::new(wiki);

        let results = race_same_key(&wiki, None);

        let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1, "{backend}: exactly one creator must win");
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, Error::Conflict { .. })));

        // The stored page is the winner's, whole.
        let stored = wiki.load("race/page").unwrap();
        assert_eq!(stored.title(), winners[0].title());
        assert_eq!(stored.body(), winners[0].body());
        assert_eq!(stored.modified_at(), winners[0].modified_at());
    }
}

#[test]
fn test_same_key_stale_token_exactly_one_wins() {
    for backend in BACKENDS {
        let (_temp, wiki) = open_wiki(backend);
        let first = wiki.update("race/page", None, "Start", "v0").unwrap();
        let wiki = Arc::new(wiki);

        let results = race_same_key(&wiki, first.modified_at());

        let wins = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(Error::Conflict { .. })))
            .count();
        assert_eq!(wins, 1, "{backend}");
        assert_eq!(conflicts, RACERS - 1, "{backend}");

        let stored = wiki.load("race/page").unwrap();
        assert_ne!(stored.modified_at(), first.modified_at());
    }
}

#[test]
fn test_different_keys_all_succeed() {
    for backend in BACKENDS {
        let (_temp, wiki) = open_wiki(backend);
        let wiki = Arc::new(wiki);
        let barrier = Arc::new(Barrier::new(RACERS));

        let handles: Vec<_> = (0..RACERS)
            .map(|i| {
                let wiki = Arc::clone(&wiki);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    wiki.update(&format!("pages/p{i}"), None, "T", "B")
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(wiki.list().unwrap().len(), RACERS, "{backend}");
    }
}

#[test]
fn test_successive_saves_chain_tokens() {
    for backend in BACKENDS {
        let (_temp, wiki) = open_wiki(backend);

        let mut token = None;
        for round in 0..5 {
            let page = wiki
                .update("chain", token, "Chain", &format!("round {round}"))
                .unwrap();
            assert!(page.modified_at() > token, "{backend}: tokens must advance");
            token = page.modified_at();
        }

        assert_eq!(wiki.load("chain").unwrap().body(), "round 4");
    }
}

#[test]
fn test_two_sqlite_handles_share_one_database() {
    let temp = tempfile::TempDir::new().unwrap();
    let first = Arc::new(open_at(temp.path(), Backend::Sqlite));
    let second = Arc::new(open_at(temp.path(), Backend::Sqlite));
    let barrier = Arc::new(Barrier::new(2));

    let handles: Vec<_> = [first, second]
        .into_iter()
        .enumerate()
        .map(|(i, wiki)| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                wiki.update("shared", None, "Shared", &format!("from {i}"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(Error::Conflict { .. }))));
}

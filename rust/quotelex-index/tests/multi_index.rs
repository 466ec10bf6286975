//! End-to-end behavior of the multi-index store.

use quotelex_index::avl::AvlIndex;
use quotelex_index::bst::BstIndex;
use quotelex_index::freq::FreqIndex;
use quotelex_index::sorted::SortedIndex;
use quotelex_index::{IndexKind, WordStore};

#[test]
fn lion_lion_tiger_scenario() {
    let mut store = WordStore::new();
    store
        .submit("lion", "the lion sleeps tonight", "The Jungle", 1994)
        .unwrap();
    store
        .submit("lion", "a lion among wolves", "Savannah", 1998)
        .unwrap();
    store
        .submit("tiger", "eye of the tiger", "Arena", 1982)
        .unwrap();

    let lion = store.lookup_by_word("lion", IndexKind::Sorted).unwrap();
    assert_eq!(lion.frequency, 2);
    assert_eq!(lion.citations.len(), 2);
    // Most-recent-first citation order.
    assert_eq!(lion.citations[0].quote, "a lion among wolves");
    assert_eq!(lion.citations[0].source, "Savannah");
    assert_eq!(lion.citations[0].year, 1998);
    assert_eq!(lion.citations[1].quote, "the lion sleeps tonight");

    let tiger = store.lookup_by_word("tiger", IndexKind::Bst).unwrap();
    assert_eq!(tiger.frequency, 1);

    store.rebuild_frequency_index();
    let results = store.lookup_by_frequency_range(2, 2).unwrap();
    assert_eq!(results, vec![("lion".to_string(), 2)]);
}

#[test]
fn all_indexes_remain_redundant_views_under_load() {
    let mut store = WordStore::new();
    fastrand::seed(42);
    let vocabulary: Vec<String> = (0..200)
        .map(|_| (0..5).map(|_| fastrand::char('a'..='z')).collect())
        .collect();
    for _ in 0..2000 {
        let word = &vocabulary[fastrand::usize(..vocabulary.len())];
        store.submit(word, "some quote", "some movie", 2005).unwrap();
    }

    for word in &vocabulary {
        let sorted = store.lookup_by_word(word, IndexKind::Sorted);
        assert_eq!(sorted, store.lookup_by_word(word, IndexKind::Bst));
        assert_eq!(sorted, store.lookup_by_word(word, IndexKind::Avl));
        if let Some(snapshot) = sorted {
            assert_eq!(snapshot.frequency as usize, snapshot.citations.len());
        }
    }
}

/// Distinct alphabetic fixture words: "wordaa", "wordab", ...
/// Submission only accepts lowercase alphabetic words, so the fixture
/// must not lean on digit suffixes.
fn fixture_word(i: usize) -> String {
    format!(
        "word{}{}",
        (b'a' + (i / 26) as u8) as char,
        (b'a' + (i % 26) as u8) as char
    )
}

#[test]
fn frequency_range_matches_linear_scan() {
    let mut store = WordStore::new();
    fastrand::seed(99);
    for i in 0..50 {
        let word = fixture_word(i);
        for _ in 0..fastrand::u32(1..8) {
            store.submit(&word, "q", "s", 2000).unwrap();
        }
    }
    store.rebuild_frequency_index();

    for (min, max) in [(1, 7), (2, 4), (3, 3), (6, 9), (1, 1)] {
        let mut expected: Vec<(String, u32)> = Vec::new();
        for i in 0..50 {
            let word = fixture_word(i);
            let snapshot = store.lookup_by_word(&word, IndexKind::Sorted).unwrap();
            if snapshot.frequency >= min && snapshot.frequency <= max {
                expected.push((snapshot.word, snapshot.frequency));
            }
        }

        let mut results = store.lookup_by_frequency_range(min, max).unwrap();
        // Equal-frequency output order is insertion-dependent by design,
        // so compare under a canonical order.
        results.sort();
        expected.sort();
        assert_eq!(results, expected, "range ({min}, {max})");
    }
}

#[test]
fn dropping_secondary_indexes_leaves_records_intact() {
    // The trees hold ids, not references; dropping them in any order must
    // not disturb the records the sorted index owns.
    let mut sorted = SortedIndex::new();
    let mut bst = BstIndex::new();
    let mut avl = AvlIndex::new();
    for word in ["lion", "tiger", "zebra", "lion"] {
        let id = sorted.insert_or_update(word, "q", "s", 2000);
        bst.insert(sorted.arena(), id);
        avl.insert(sorted.arena(), id);
    }
    let freq = FreqIndex::build(sorted.arena(), sorted.ids());

    drop(avl);
    drop(freq);
    drop(bst);

    let id = sorted.search("lion").unwrap();
    assert_eq!(sorted.get(id).frequency(), 2);
    assert_eq!(sorted.len(), 3);
}

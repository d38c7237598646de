// core/tests/completion_properties.rs
//
// Behavioural properties of prefix completion checked against a brute-force
// scan of the word list:
// - every stored word completes to exactly one node spelling it
// - extending a prefix never adds matches
// - prefixes nothing starts with report no match
// - insertion order changes shape but not results
// - repeated queries agree

use libradix_core::Trie;
use std::collections::BTreeSet;

const WORDS: &[&str] = &[
    "bear", "bull", "stock", "bell", "bellow", "be", "bulls", "stop", "stockade", "star", "a",
    "an", "and", "ant", "anthem", "bear", "zebra", "zeal", "zero", "z", "ñandú", "ñu",
];

fn brute_force(words: &[&str], prefix: &str) -> Option<BTreeSet<String>> {
    if prefix.is_empty() {
        return Some(BTreeSet::new());
    }
    let hits: BTreeSet<String> = words
        .iter()
        .filter(|w| w.starts_with(prefix))
        .map(|w| w.to_string())
        .collect();
    if hits.is_empty() {
        None
    } else {
        Some(hits)
    }
}

fn completion_set(trie: &Trie, prefix: &str) -> Option<BTreeSet<String>> {
    trie.complete_words(prefix)
        .map(|ws| ws.into_iter().map(str::to_string).collect())
}

/// Every prefix of every word, plus each of those with one foreign character
/// appended.
fn probe_prefixes(words: &[&str]) -> Vec<String> {
    let mut probes = BTreeSet::new();
    for w in words {
        let chars: Vec<char> = w.chars().collect();
        for k in 0..=chars.len() {
            let p: String = chars[..k].iter().collect();
            for extra in ['a', 'e', 'l', 'q', 's', 'x', 'ú'] {
                probes.insert(format!("{p}{extra}"));
            }
            probes.insert(p);
        }
    }
    probes.into_iter().collect()
}

fn orderings() -> Vec<Vec<&'static str>> {
    let mut out = vec![WORDS.to_vec()];
    let mut reversed = WORDS.to_vec();
    reversed.reverse();
    out.push(reversed);
    for r in [1, 5, 9, 13] {
        let mut rotated = WORDS.to_vec();
        rotated.rotate_left(r);
        out.push(rotated);
    }
    let mut sorted = WORDS.to_vec();
    sorted.sort();
    out.push(sorted);
    out
}

#[test]
fn reference_scenarios() {
    let trie = Trie::from_words(["bear", "bull", "stock", "bell"]);
    let set = |ws: &[&str]| Some(ws.iter().map(|w| w.to_string()).collect::<BTreeSet<_>>());

    assert_eq!(completion_set(&trie, "b"), set(&["bear", "bull", "bell"]));
    assert_eq!(completion_set(&trie, "be"), set(&["bear", "bell"]));
    assert_eq!(completion_set(&trie, "bell"), set(&["bell"]));
    assert_eq!(completion_set(&trie, "bu"), set(&["bull"]));
    assert_eq!(completion_set(&trie, "z"), None);
    assert_eq!(trie.complete(""), Some(vec![]));
}

#[test]
fn every_word_completes_to_itself_once() {
    for words in orderings() {
        let trie = Trie::from_words(words.iter().copied());
        for w in &words {
            let hits = trie.complete(w).unwrap_or_else(|| panic!("no match for {w}"));
            let spelling: Vec<_> = hits.iter().filter(|&&id| trie.word_of(id) == Some(*w)).collect();
            assert_eq!(spelling.len(), 1, "word {w} in order {words:?}");
            assert_eq!(trie.path_text(*spelling[0]), *w);
        }
    }
}

#[test]
fn matches_brute_force_for_all_orders() {
    let probes = probe_prefixes(WORDS);
    for words in orderings() {
        let trie = Trie::from_words(words.iter().copied());
        trie.check_invariants().unwrap();
        for p in &probes {
            assert_eq!(
                completion_set(&trie, p),
                brute_force(WORDS, p),
                "prefix {p:?} with order {words:?}"
            );
        }
    }
}

#[test]
fn extending_prefix_narrows_results() {
    let trie = Trie::from_words(WORDS.iter().copied());
    for p in probe_prefixes(WORDS) {
        if p.is_empty() {
            continue;
        }
        let mut shorter: Vec<char> = p.chars().collect();
        shorter.pop();
        if shorter.is_empty() {
            continue;
        }
        let shorter: String = shorter.into_iter().collect();
        match (trie.complete(&shorter), trie.complete(&p)) {
            (_, None) => {}
            (None, Some(_)) => panic!("{p:?} matched but {shorter:?} did not"),
            (Some(wide), Some(narrow)) => {
                let wide: BTreeSet<_> = wide.into_iter().collect();
                assert!(narrow.iter().all(|id| wide.contains(id)), "{p:?} vs {shorter:?}");
            }
        }
    }
}

#[test]
fn unknown_prefixes_report_no_match() {
    let trie = Trie::from_words(WORDS.iter().copied());
    for p in ["c", "bx", "beard", "bellows", "stoc k", "anthems", "zz", "ño", "q"] {
        assert!(trie.complete(p).is_none(), "{p:?} should not match");
    }
}

#[test]
fn repeated_queries_agree() {
    let trie = Trie::from_words(WORDS.iter().copied());
    for p in ["b", "be", "st", "an", "z", "ñ", "nope"] {
        assert_eq!(trie.complete(p), trie.complete(p));
    }
}

#[test]
fn absent_or_empty_corpus() {
    let trie = Trie::from_optional_words(None::<Vec<&str>>);
    assert_eq!(trie.complete("b"), Some(vec![]));
    assert_eq!(trie.complete(""), Some(vec![]));

    let trie = Trie::from_words([""]);
    assert!(trie.is_empty());
    assert_eq!(trie.complete("a"), Some(vec![]));
}

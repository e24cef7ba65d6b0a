//! Engine properties checked over a fixed corpus of answers.
//!
//! Every pair drawn from the corpus is checked, so the properties hold for
//! punctuation, whitespace runs, case changes, non-ASCII text and empty
//! strings alike.

use quizmark_core::{accuracy, align, classify, levenshtein, normalize, score, AccuracyBand};

const CORPUS: &[&str] = &[
    "",
    " ",
    "...",
    "cat",
    "bat",
    "Cat!",
    "hello there",
    "Hello World!",
    "hello world",
    "  hello \t  world  ",
    "(a) [b] {c}",
    "well—known",
    "well-known",
    "Ownership moves values; borrowing lends them.",
    "ownership moves value, borrowing lends them",
    "Xuất sắc!",
    "xuat sac",
    "Đáp án: Hà Nội.",
    "ha noi",
    "İstanbul",
    "ß and SS",
    "🌟 emoji ✨",
];

fn pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    CORPUS
        .iter()
        .flat_map(|a| CORPUS.iter().map(move |b| (*a, *b)))
}

#[test]
fn normalize_is_idempotent() {
    for s in CORPUS {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "input {s:?}");
    }
}

#[test]
fn self_accuracy_is_perfect() {
    for s in CORPUS {
        assert_eq!(accuracy(s, s), 100.0, "input {s:?}");
    }
}

#[test]
fn accuracy_is_symmetric() {
    for (a, b) in pairs() {
        assert_eq!(accuracy(a, b), accuracy(b, a), "{a:?} vs {b:?}");
    }
}

#[test]
fn accuracy_stays_in_range_with_one_decimal() {
    for (a, b) in pairs() {
        let value = accuracy(a, b);
        assert!((0.0..=100.0).contains(&value), "{a:?} vs {b:?}: {value}");
        let tenths = value * 10.0;
        assert!((tenths - tenths.round()).abs() < 1e-9, "{a:?} vs {b:?}: {value}");
    }
}

#[test]
fn distance_is_bounded_by_longer_normalized_text() {
    for (a, b) in pairs() {
        let (na, nb) = (normalize(a), normalize(b));
        let bound = na.chars().count().max(nb.chars().count());
        let distance = levenshtein(&na, &nb);
        assert!(distance <= bound, "{a:?} vs {b:?}: {distance} > {bound}");
        assert_eq!(distance, levenshtein(&nb, &na));
        assert_eq!(score(a, b).max_len, bound);
    }
}

#[test]
fn equal_normalized_texts_score_100() {
    for (a, b) in pairs() {
        if normalize(a) == normalize(b) {
            assert_eq!(accuracy(a, b), 100.0, "{a:?} vs {b:?}");
            assert_eq!(score(a, b).distance, 0);
        }
    }
}

#[test]
fn alignment_covers_every_original_character() {
    for (a, b) in pairs() {
        let alignment = align(a, b);
        assert_eq!(alignment.len(), a.chars().count(), "{a:?} vs {b:?}");
        let rebuilt: String = alignment.spans().into_iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, a);
    }
}

#[test]
fn alignment_never_matches_more_than_the_reference_allows() {
    for (a, b) in pairs() {
        if normalize(a) == normalize(b) {
            continue;
        }
        let matched = align(a, b).matched_count();
        assert!(matched <= normalize(b).chars().count(), "{a:?} vs {b:?}");
        assert!(matched <= normalize(a).chars().count(), "{a:?} vs {b:?}");
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(accuracy("hello world", "Hello World!"), 100.0);
    assert_eq!(accuracy("bat", "cat"), 66.7);
    assert_eq!(accuracy("", "hello there"), 0.0);
    assert_eq!(accuracy("?!", "..."), 100.0);

    let good = classify(72.5);
    assert_eq!(good.band, AccuracyBand::Good);
    assert_eq!(good.feedback, "✨ Tốt lắm!");
    assert_eq!(classify(45.0).band, AccuracyBand::Poor);
}

#[test]
fn classification_is_monotonic() {
    let mut previous = AccuracyBand::Poor;
    for tenth in 0..=1000 {
        let band = classify(tenth as f64 / 10.0).band;
        assert!(band >= previous, "band dropped at {}", tenth as f64 / 10.0);
        previous = band;
    }
    assert_eq!(previous, AccuracyBand::Excellent);
}

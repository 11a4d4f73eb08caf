use std::fs;
use std::io::Write;
use std::path::PathBuf;

use mksort::harness::{ALL_RUNNERS, DataGenerator, DataSize, GeneratorError, SortRunner, trimmed_mean};

/// Writes `lines` numbered lines to a fresh temp file and returns its path.
fn temp_file_with_lines(tag: &str, lines: usize) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mksort_{tag}_{}.txt", std::process::id()));
    let mut file = fs::File::create(&path).unwrap();
    for i in 0..lines {
        writeln!(file, "line{i}").unwrap();
    }
    path
}

#[test]
fn test_data_size_counts_and_labels() {
    assert_eq!(DataSize::Small.count(), 100_000);
    assert_eq!(DataSize::Medium.count(), 1_000_000);
    assert_eq!(DataSize::Large.count(), 3_000_000);
    assert_eq!(DataSize::Small.label(), "SMALL");
    assert_eq!(DataSize::Medium.label(), "MEDIUM");
    assert_eq!(DataSize::Large.label(), "LARGE");
    assert_eq!(DataSize::ALL.len(), 3);
}

#[test]
fn test_random_generator_shape() {
    let data = DataGenerator::Random.generate(DataSize::Small).unwrap();
    assert_eq!(data.len(), 100_000);
    assert!(data.iter().all(|s| s.len() == 64));
    assert!(
        data.iter()
            .all(|s| s.bytes().all(|b| b.is_ascii_alphanumeric()))
    );
}

#[test]
fn test_pseudo_word_generator_shape() {
    let data = DataGenerator::PseudoWords.generate(DataSize::Small).unwrap();
    assert_eq!(data.len(), 100_000);
    assert!(data.iter().all(|s| (1..=28).contains(&s.len())));
    assert!(
        data.iter()
            .all(|s| s.bytes().all(|b| b.is_ascii_lowercase()))
    );
}

#[test]
fn test_generators_are_deterministic() {
    let first = DataGenerator::PseudoWords.generate(DataSize::Small).unwrap();
    let second = DataGenerator::PseudoWords.generate(DataSize::Small).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generator_display_names() {
    assert_eq!(DataGenerator::Random.display_name(), "Random");
    assert_eq!(DataGenerator::PseudoWords.display_name(), "Psuedo words");
    let file = DataGenerator::File(PathBuf::from("/some/where/words.txt"));
    assert_eq!(file.display_name(), "words.txt");
}

#[test]
fn test_file_generator_reads_requested_count() {
    // Ten extra lines past SMALL; the tail must be left unread.
    let path = temp_file_with_lines("enough", 100_010);
    let data = DataGenerator::File(path.clone())
        .generate(DataSize::Small)
        .unwrap();
    assert_eq!(data.len(), 100_000);
    assert_eq!(data[0], "line0");
    assert_eq!(data[99_999], "line99999");
    fs::remove_file(path).unwrap();
}

#[test]
fn test_file_generator_too_few_lines() {
    let path = temp_file_with_lines("short", 100);
    let err = DataGenerator::File(path.clone())
        .generate(DataSize::Small)
        .unwrap_err();
    match &err {
        GeneratorError::TooFewLines { missing, .. } => assert_eq!(*missing, 99_900),
        other => panic!("expected TooFewLines, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("mksort_short"), "message was: {message}");
    assert!(message.contains("99900 more needed"), "message was: {message}");
    fs::remove_file(path).unwrap();
}

#[test]
fn test_file_generator_missing_file() {
    let r#gen = DataGenerator::File(PathBuf::from("/definitely/not/here.txt"));
    match r#gen.generate(DataSize::Small) {
        Err(GeneratorError::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_runner_roster() {
    let names: Vec<&str> = ALL_RUNNERS.iter().map(|r| r.display_name()).collect();
    assert_eq!(
        names,
        vec!["Mergesort", "Quicksort", "Multikey 1", "Multikey 2", "Burstsort"]
    );
}

#[test]
fn test_every_runner_sorts() {
    let original = vec![
        "pear".to_string(),
        "apple".to_string(),
        "plum".to_string(),
        "fig".to_string(),
        "apple".to_string(),
    ];
    let mut expected = original.clone();
    expected.sort();

    for runner in ALL_RUNNERS {
        let mut data = original.clone();
        runner.sort(&mut data);
        assert_eq!(data, expected, "runner {}", runner.display_name());
    }
}

#[test]
fn test_runner_dispatch_is_in_place() {
    let mut data = vec!["b", "a"];
    SortRunner::Multikey2.sort(&mut data);
    assert_eq!(data, vec!["a", "b"]);
}

#[test]
fn test_trimmed_mean_drops_extremes() {
    let mut samples = [9, 1, 5, 3, 7];
    assert_eq!(trimmed_mean(&mut samples), 5);

    // One wild outlier must not move the result.
    let mut samples = [10_000, 4, 5, 6, 1];
    assert_eq!(trimmed_mean(&mut samples), 5);

    // Integer mean truncates.
    let mut samples = [0, 0, 1, 1, 50];
    assert_eq!(trimmed_mean(&mut samples), 0);
}

use metro_route::{Error, StationDirectory, StationKey, StationRecord};

fn sample_directory() -> StationDirectory {
    StationDirectory::from_records([
        StationRecord::new("Central", "0", "2").with_line_name("Circle"),
        StationRecord::new("Central", "1", "5"),
        StationRecord::new("Riverside", "2", "2").with_address("1 Quay Street"),
        StationRecord::new("North Central", "3", "7"),
        StationRecord::new("Harbour", "4", "5"),
    ])
}

#[test]
fn test_resolve_exact_name_and_line() {
    let directory = sample_directory();

    assert_eq!(directory.resolve("Central", "2").unwrap(), 0);
    assert_eq!(directory.resolve("Central", "5").unwrap(), 1);
}

#[test]
fn test_resolve_wrong_line_is_not_found() {
    let directory = sample_directory();

    match directory.resolve("Central", "9") {
        Err(Error::StationNotFound { name, line }) => {
            assert_eq!(name, "Central");
            assert_eq!(line, "9");
        }
        other => panic!("expected StationNotFound, got {:?}", other),
    }
}

#[test]
fn test_station_id_zero_is_a_real_station() {
    let directory = sample_directory();

    let id = directory.resolve("Central", "2").unwrap();
    assert_eq!(id, 0);
    assert_eq!(directory.by_id(0).unwrap().line_name.as_deref(), Some("Circle"));
    assert!(directory.resolve("Nowhere", "0").is_err());
}

#[test]
fn test_resolve_is_case_sensitive_and_trims() {
    let directory = sample_directory();

    assert!(directory.resolve("central", "2").is_err());
    assert_eq!(directory.resolve("  Central ", " 2").unwrap(), 0);
}

#[test]
fn test_by_id() {
    let directory = sample_directory();

    let station = directory.by_id(2).unwrap();
    assert_eq!(station.name, "Riverside");
    assert_eq!(station.address.as_deref(), Some("1 Quay Street"));
    assert_eq!(station.line_name, None);

    let missing = directory.by_id(42).unwrap_err();
    assert!(matches!(missing, Error::StationIdNotFound(42)));
    assert!(missing.is_not_found());
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let directory = sample_directory();

    let matches = directory.search("cEnTrAl");
    assert_eq!(
        matches,
        vec![
            StationKey::new("Central", "2"),
            StationKey::new("Central", "5"),
            StationKey::new("North Central", "7"),
        ]
    );

    assert!(directory.search("airport").is_empty());
    assert_eq!(directory.search("").len(), directory.len());
}

#[test]
fn test_malformed_id_is_skipped_and_reported() {
    let mut directory = StationDirectory::new();
    let report = directory.load([
        StationRecord::new("Alpha", "10", "1").at_line(2),
        StationRecord::new("Bravo", "ten", "1").at_line(3),
        StationRecord::new("Charlie", "12", "1").at_line(4),
    ]);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 3);
    assert_eq!(report.skipped[0].content, "Bravo,ten,1");
    assert!(report.skipped[0].reason.contains("not numeric"));

    assert_eq!(directory.resolve("Alpha", "1").unwrap(), 10);
    assert_eq!(directory.resolve("Charlie", "1").unwrap(), 12);
    assert!(directory.resolve("Bravo", "1").is_err());
}

#[test]
fn test_negative_and_empty_fields_are_malformed() {
    let mut directory = StationDirectory::new();
    let report = directory.load([
        StationRecord::new("Alpha", "-1", "1"),
        StationRecord::new("", "2", "1"),
        StationRecord::new("Charlie", "3", " "),
        StationRecord::new("Delta", "", "1"),
    ]);

    assert_eq!(report.loaded, 0);
    assert_eq!(report.skipped.len(), 4);
    assert!(directory.is_empty());
}

#[test]
fn test_duplicates_keep_first_row() {
    let mut directory = StationDirectory::new();
    let report = directory.load([
        StationRecord::new("Alpha", "1", "1"),
        StationRecord::new("Alpha", "2", "1"),
        StationRecord::new("Bravo", "1", "3"),
        StationRecord::new("Alpha", "3", "4"),
    ]);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped.len(), 2);
    assert!(report.skipped[0].reason.contains("duplicate station"));
    assert!(report.skipped[1].reason.contains("duplicate station id"));

    assert_eq!(directory.resolve("Alpha", "1").unwrap(), 1);
    assert_eq!(directory.resolve("Alpha", "4").unwrap(), 3);
    assert!(!directory.contains(2));
}

#[test]
fn test_stations_listed_in_id_order() {
    let directory = sample_directory();

    let ids: Vec<u64> = directory.stations().map(|station| station.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert_eq!(directory.len(), 5);
}

#[test]
fn test_blank_optional_fields_become_none() {
    let directory = StationDirectory::from_records([StationRecord::new("Alpha", "1", "1")
        .with_address("  ")
        .with_line_name("")]);

    let station = directory.by_id(1).unwrap();
    assert_eq!(station.address, None);
    assert_eq!(station.line_name, None);
    assert_eq!(station.to_string(), "Alpha, Line : 1");
}

#[test]
fn test_search_ignores_punctuation_on_both_sides() {
    let directory = StationDirectory::from_records([
        StationRecord::new("Saint-Lazare", "1", "13"),
        StationRecord::new("Gare d'Austerlitz", "2", "5"),
    ]);
    let saint_lazare = vec![StationKey::new("Saint-Lazare", "13")];

    assert_eq!(directory.search("Saint-Lazare"), saint_lazare);
    assert_eq!(directory.search("saintlazare"), saint_lazare);
    assert_eq!(directory.search("SAINT-LAZ"), saint_lazare);
    assert_eq!(
        directory.search("d'austerlitz"),
        vec![StationKey::new("Gare d'Austerlitz", "5")]
    );
    assert_eq!(directory.search("gare daust").len(), 1);
}

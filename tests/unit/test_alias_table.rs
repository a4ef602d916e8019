use gender_tally::models::{DEFAULT_FEMALE_ALIASES, DEFAULT_MALE_ALIASES};
use gender_tally::{AliasTable, Category};
use std::io::Write;

#[test]
fn default_table_contains_documented_aliases() {
    let table = AliasTable::default();

    let male: Vec<_> = table.male_aliases().collect();
    let female: Vec<_> = table.female_aliases().collect();

    for alias in DEFAULT_MALE_ALIASES {
        assert!(male.contains(alias), "missing male alias {}", alias);
    }
    for alias in DEFAULT_FEMALE_ALIASES {
        assert!(female.contains(alias), "missing female alias {}", alias);
    }
}

#[test]
fn male_wins_when_sets_overlap() {
    let table = AliasTable::new(vec!["shared", "m"], vec!["SHARED", "f"]);

    assert_eq!(table.overlap(), vec!["shared"]);
    assert_eq!(table.classify_line("Shared"), Some(Category::Male));
}

#[test]
fn alias_file_round_trip_through_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"male": ["Anh", "Ông"], "female": ["Chị", "Bà"]}}"#).unwrap();

    let table = AliasTable::from_file(file.path()).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.classify_line("ông"), Some(Category::Male));
    assert_eq!(table.classify_line("BÀ"), Some(Category::Female));
    assert_eq!(table.classify_line("nam"), Some(Category::Unknown));
}

#[test]
fn alias_file_with_only_one_category_is_accepted() {
    let table = AliasTable::from_json_str(r#"{"female": ["f"]}"#).unwrap();
    assert_eq!(table.classify_line("f"), Some(Category::Female));
    assert_eq!(table.male_aliases().count(), 0);
}

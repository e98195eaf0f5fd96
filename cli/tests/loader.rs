use std::fs;
use std::path::Path;

use degrees::load_dataset;
use tempfile::TempDir;

fn write_fixture_dataset(dir: &Path) {
    fs::write(
        dir.join("people.csv"),
        "id,name,birth\n\
         102,Kevin Bacon,1958\n\
         129,Tom Cruise,1962\n\
         705,Robin Wright,\n",
    )
    .unwrap();
    fs::write(
        dir.join("movies.csv"),
        "id,title,year\n\
         104257,A Few Good Men,1992\n\
         109830,Forrest Gump,1994\n",
    )
    .unwrap();
    fs::write(
        dir.join("stars.csv"),
        "person_id,movie_id\n\
         102,104257\n\
         129,104257\n\
         705,109830\n\
         999,104257\n\
         102,888888\n",
    )
    .unwrap();
}

#[test]
fn test_loads_the_three_csv_files() {
    let dir = TempDir::new().unwrap();
    write_fixture_dataset(dir.path());

    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(dataset.people_count(), 3);
    assert_eq!(dataset.events_count(), 2);
    assert_eq!(dataset.person("102").unwrap().name, "Kevin Bacon");
    assert_eq!(dataset.event("104257").unwrap().year, 1992);
}

#[test]
fn test_blank_birth_year_becomes_unknown() {
    let dir = TempDir::new().unwrap();
    write_fixture_dataset(dir.path());

    let dataset = load_dataset(dir.path()).unwrap();

    assert_eq!(dataset.person("705").unwrap().birth_year, 0);
    assert_eq!(dataset.person("102").unwrap().birth_year, 1958);
}

#[test]
fn test_star_rows_with_unknown_ids_are_dropped() {
    let dir = TempDir::new().unwrap();
    write_fixture_dataset(dir.path());

    let dataset = load_dataset(dir.path()).unwrap();

    // 999 is not a person and 888888 is not a movie.
    assert_eq!(dataset.links().len(), 3);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    let result = load_dataset(dir.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("people.csv"));
}

#[test]
fn test_malformed_row_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_fixture_dataset(dir.path());
    fs::write(dir.path().join("movies.csv"), "id,title,year\nonly-one-field\n").unwrap();

    assert!(load_dataset(dir.path()).is_err());
}

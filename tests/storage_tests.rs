use gradebook::{GradeBook, Storage};
use std::fs;
use tempfile::NamedTempFile;

fn build_sample_book() -> GradeBook {
    let mut book = GradeBook::new();
    book.add_course("CS101", "T1", 3).unwrap();
    book.add_course("ART1", "T2", 1).unwrap();
    book.add_student("a@x.com", "Ann").unwrap();
    book.add_student("b@x.com", "Ben").unwrap();
    book.register("a@x.com", "CS101", 3.0).unwrap();
    book.register("a@x.com", "ART1", 1.0).unwrap();
    book.register("b@x.com", "CS101", 4.0).unwrap();
    book.compute_gpa("a@x.com").unwrap();
    book.compute_gpa("b@x.com").unwrap();
    book
}

// load(save(book)) reproduces an equivalent book: same students, courses,
// registrations, and GPAs
#[test]
fn test_round_trip_preserves_book() {
    let temp_file = NamedTempFile::new().unwrap();
    let storage = Storage::new(temp_file.path());

    let book = build_sample_book();
    storage.save(&book).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded.students(), book.students());
    assert_eq!(loaded.courses(), book.courses());
    assert_eq!(loaded.format_version, book.format_version);
}

// A second save/load cycle produces identical bytes (stable ordering)
#[test]
fn test_round_trip_is_stable() {
    let temp_file = NamedTempFile::new().unwrap();
    let storage = Storage::new(temp_file.path());

    storage.save(&build_sample_book()).unwrap();
    let first = fs::read_to_string(temp_file.path()).unwrap();

    let loaded = storage.load().unwrap();
    storage.save(&loaded).unwrap();
    let second = fs::read_to_string(temp_file.path()).unwrap();

    assert_eq!(first, second);
}

// Missing storage on load is not an error: the book starts empty
#[test]
fn test_missing_file_loads_empty_book() {
    let temp_dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(temp_dir.path().join("no-such-file.toml"));

    let book = storage.load().unwrap();
    assert_eq!(book.student_count(), 0);
    assert_eq!(book.course_count(), 0);
}

// A registration naming a course missing from the file is dropped on
// load; the rest of the student record survives
#[test]
fn test_dangling_registration_dropped_on_load() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        temp_file.path(),
        r#"
format_version = 1

[[course]]
name = "CS101"
trimester = "T1"
credits = 3

[[student]]
email = "a@x.com"
names = "Ann"
gpa = 3.0

[[student.registration]]
course = "CS101"
grade = 4.0
credits = 3

[[student.registration]]
course = "DELETED"
grade = 1.0
credits = 2
"#,
    )
    .unwrap();

    let storage = Storage::new(temp_file.path());
    let book = storage.load().unwrap();

    let student = book.find_student_by_email("a@x.com").unwrap();
    assert_eq!(student.names, "Ann");
    assert_eq!(student.gpa, 3.0);
    assert_eq!(student.registrations.len(), 1);
    assert_eq!(student.registrations[0].course, "CS101");
}

// GPA computation uses the credits snapshot stored in the registration,
// even when the course record on disk carries a different weight
#[test]
fn test_gpa_uses_snapshot_not_course_record() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        temp_file.path(),
        r#"
format_version = 1

[[course]]
name = "CS101"
trimester = "T1"
credits = 5

[[course]]
name = "ART1"
trimester = "T1"
credits = 1

[[student]]
email = "a@x.com"
names = "Ann"
gpa = 0.0

[[student.registration]]
course = "CS101"
grade = 3.0
credits = 3

[[student.registration]]
course = "ART1"
grade = 1.0
credits = 1
"#,
    )
    .unwrap();

    let storage = Storage::new(temp_file.path());
    let mut book = storage.load().unwrap();

    // (3.0*3 + 1.0*1) / (3+1), with the snapshotted 3 credits for CS101
    assert_eq!(book.compute_gpa("a@x.com").unwrap(), 2.5);
}

// A malformed file is a load error, not a silent empty book
#[test]
fn test_malformed_file_is_an_error() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), "this is not toml [[[").unwrap();

    let storage = Storage::new(temp_file.path());
    assert!(storage.load().is_err());
}

// Loaded books accept further mutations against the rebuilt indexes
#[test]
fn test_loaded_book_enforces_uniqueness() {
    let temp_file = NamedTempFile::new().unwrap();
    let storage = Storage::new(temp_file.path());
    storage.save(&build_sample_book()).unwrap();

    let mut loaded = storage.load().unwrap();
    assert!(loaded.add_student("a@x.com", "Ann Again").is_err());
    assert!(loaded.add_course("CS101", "T3", 4).is_err());
    assert!(loaded.add_student("c@x.com", "Cat").is_ok());
}

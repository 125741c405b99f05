use dehanzi_core::{rename_matching, Extensions, RenameError};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name.as_bytes()).unwrap();
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_strips_cjk_characters() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "旅行photo.jpg");
    touch(temp_dir.path(), "day1_海边.png");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert_eq!(summary.renamed_count(), 2);
    assert!(summary.failures.is_empty());
    assert_eq!(
        file_names(temp_dir.path()),
        BTreeSet::from(["photo.jpg".to_string(), "day1_.png".to_string()])
    );
    // Content travels with the rename
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("photo.jpg")).unwrap(),
        "旅行photo.jpg"
    );
}

#[test]
fn test_replacement_is_applied_per_character() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a中文b图c.jpg");

    let summary = rename_matching(temp_dir.path(), "-", &Extensions::default()).unwrap();

    assert_eq!(summary.renamed[0].new_name(), "a--b-c.jpg");
    assert!(temp_dir.path().join("a--b-c.jpg").exists());
}

#[test]
fn test_empty_result_falls_back_to_image_number() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "中文.jpg");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert_eq!(summary.renamed_count(), 1);
    assert_eq!(summary.renamed[0].new_name(), "image_1.jpg");
    assert!(temp_dir.path().join("image_1.jpg").exists());
}

#[test]
fn test_fallback_number_counts_successes_not_position() {
    let temp_dir = TempDir::new().unwrap();
    // Sorted order: "a.jpg" (skipped), "b中.jpg", "中文.jpg"
    touch(temp_dir.path(), "a.jpg");
    touch(temp_dir.path(), "b中.jpg");
    touch(temp_dir.path(), "中文.jpg");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    let new_names: Vec<String> = summary.renamed.iter().map(|p| p.new_name()).collect();
    assert_eq!(new_names, vec!["b.jpg", "image_2.jpg"]);
}

#[test]
fn test_collision_with_existing_file_gets_suffix() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.jpg");
    touch(temp_dir.path(), "中a.jpg");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert_eq!(summary.renamed_count(), 1);
    assert_eq!(summary.renamed[0].new_name(), "a_1.jpg");
    // The existing file is untouched
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.jpg")).unwrap(),
        "a.jpg"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a_1.jpg")).unwrap(),
        "中a.jpg"
    );
}

#[test]
fn test_collision_between_files_of_the_same_run() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "中a.jpg");
    touch(temp_dir.path(), "文a.jpg");
    touch(temp_dir.path(), "a图.jpg");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert_eq!(summary.renamed_count(), 3);
    assert_eq!(
        file_names(temp_dir.path()),
        BTreeSet::from([
            "a.jpg".to_string(),
            "a_1.jpg".to_string(),
            "a_2.jpg".to_string()
        ])
    );
}

#[test]
fn test_reserved_characters_in_replacement_are_sanitized() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "x中y.jpg");
    touch(temp_dir.path(), "p文q.png");

    let summary = rename_matching(temp_dir.path(), ":", &Extensions::default()).unwrap();
    assert_eq!(summary.renamed_count(), 2);
    assert!(temp_dir.path().join("x_y.jpg").exists());
    assert!(temp_dir.path().join("p_q.png").exists());

    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "x中y.jpg");
    rename_matching(temp_dir.path(), "?", &Extensions::default()).unwrap();
    assert!(temp_dir.path().join("x_y.jpg").exists());
}

#[test]
fn test_extensions_outside_set_are_untouched() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "中文.txt");
    touch(temp_dir.path(), "中文.webp");
    touch(temp_dir.path(), "中文");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert!(summary.is_empty());
    assert_eq!(
        file_names(temp_dir.path()),
        BTreeSet::from([
            "中文.txt".to_string(),
            "中文.webp".to_string(),
            "中文".to_string()
        ])
    );
}

#[test]
fn test_extension_match_ignores_case() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "中a.JPG");
    touch(temp_dir.path(), "中b.Tiff");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert_eq!(summary.renamed_count(), 2);
    assert!(temp_dir.path().join("a.JPG").exists());
    assert!(temp_dir.path().join("b.Tiff").exists());
}

#[test]
fn test_custom_extension_set() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "中a.webp");
    touch(temp_dir.path(), "中b.jpg");

    let extensions = Extensions::parse_list("webp").unwrap();
    let summary = rename_matching(temp_dir.path(), "", &extensions).unwrap();

    assert_eq!(summary.renamed_count(), 1);
    assert!(temp_dir.path().join("a.webp").exists());
    assert!(temp_dir.path().join("中b.jpg").exists());
}

#[test]
fn test_files_without_cjk_are_not_reported() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "holiday.jpg");
    // Hiragana and extension-A ideographs are outside the handled block
    touch(temp_dir.path(), "しゃしん.jpg");
    touch(temp_dir.path(), "\u{3400}.jpg");

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert!(summary.is_empty());
    assert_eq!(file_names(temp_dir.path()).len(), 3);
}

#[test]
fn test_second_run_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.jpg");
    touch(temp_dir.path(), "中a.jpg");
    touch(temp_dir.path(), "中文.png");
    touch(temp_dir.path(), "图 片.gif");

    let first = rename_matching(temp_dir.path(), "x", &Extensions::default()).unwrap();
    assert_eq!(first.renamed_count(), 3);
    let after_first = file_names(temp_dir.path());

    let second = rename_matching(temp_dir.path(), "x", &Extensions::default()).unwrap();
    assert_eq!(second.renamed_count(), 0);
    assert!(second.failures.is_empty());
    assert_eq!(file_names(temp_dir.path()), after_first);
}

#[test]
fn test_missing_directory_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let err = rename_matching(&missing, "", &Extensions::default()).unwrap_err();

    assert!(matches!(err, RenameError::NotFound(ref path) if path == &missing));
    assert!(err.is_invalid_input());
}

#[test]
fn test_file_path_is_not_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "中文.jpg");
    let file = temp_dir.path().join("中文.jpg");

    let err = rename_matching(&file, "", &Extensions::default()).unwrap_err();

    assert!(matches!(err, RenameError::NotADirectory(_)));
    // Nothing was renamed
    assert!(file.exists());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_target_is_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "中a.jpg");
    std::os::unix::fs::symlink(
        temp_dir.path().join("gone.jpg"),
        temp_dir.path().join("a.jpg"),
    )
    .unwrap();

    let summary = rename_matching(temp_dir.path(), "", &Extensions::default()).unwrap();

    assert_eq!(summary.renamed[0].new_name(), "a_1.jpg");
    assert!(fs::symlink_metadata(temp_dir.path().join("a.jpg"))
        .unwrap()
        .file_type()
        .is_symlink());
}

#[cfg(unix)]
#[test]
fn test_one_failure_does_not_stop_the_run() {
    let temp_dir = TempDir::new().unwrap();
    // 20 replacement bytes per ideograph push this name past the 255-byte limit
    let long_name = format!("中{}.jpg", "a".repeat(240));
    touch(temp_dir.path(), &long_name);
    touch(temp_dir.path(), "中b.jpg");

    let replacement = "x".repeat(20);
    let summary = rename_matching(temp_dir.path(), &replacement, &Extensions::default()).unwrap();

    assert_eq!(summary.failure_count(), 1);
    assert_eq!(summary.renamed_count(), 1);

    let failure = &summary.failures[0];
    assert_eq!(failure.file_name, long_name);
    assert!(failure.error.contains("Failed to rename"), "{}", failure.error);
    assert!(failure.error.contains(&long_name), "{}", failure.error);

    assert_eq!(summary.renamed[0].new_name(), format!("{replacement}b.jpg"));
    assert!(temp_dir.path().join(&long_name).exists());
    assert!(temp_dir.path().join(format!("{replacement}b.jpg")).exists());
}

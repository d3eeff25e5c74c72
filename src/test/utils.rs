use std::path::PathBuf;

/// Absolute path of a fixture under src/test/inputs
pub fn _get_test_input_file(filename: &str) -> String {
    let mut f = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    f.push("src/test/inputs");
    f.push(filename);
    f.to_string_lossy().into_owned()
}

/// Absolute path for a csv written by a test, grouped per test module so parallel tests don't collide
pub fn _get_test_output_file(filename: &str, test_subdir: &str) -> String {
    let mut f = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    f.push(format!("src/test/outputs/{}/{}.csv", test_subdir, filename));
    let parent = f.parent().unwrap();
    std::fs::create_dir_all(parent).unwrap();
    f.to_string_lossy().into_owned()
}

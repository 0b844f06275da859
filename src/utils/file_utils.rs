const SEPARATORS: [char; 2] = ['/', '\\'];

/// Final component of `path`, for display only. The filesystem is never touched.
/// Empty and `.` components are skipped, so `a/b/./` names `b`.
pub fn file_name(path: &str) -> &str {
    path.split(SEPARATORS)
        .filter(|part| !part.is_empty() && *part != ".")
        .last()
        .unwrap_or("")
}

//! Windows-to-POSIX path conversion

/// Prefix of Windows extended-length paths (`\\?\C:\...`)
const EXTENDED_PATH_PREFIX: &str = r"\\?\";

/// Convert a Windows-style path to POSIX separators.
///
/// Strips a leading extended-length prefix, turns every backslash into a
/// forward slash, and collapses runs of slashes into one. POSIX paths come
/// back unchanged.
pub fn convert_path(path: &str) -> String {
    let path = path.strip_prefix(EXTENDED_PATH_PREFIX).unwrap_or(path);

    let mut converted = String::with_capacity(path.len());
    for c in path.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && converted.ends_with('/') {
            continue;
        }
        converted.push(c);
    }
    converted
}

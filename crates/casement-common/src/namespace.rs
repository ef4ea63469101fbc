/// Joins a store namespace and a window name into a composite key.
///
/// `concat_namespace("window-state", "main", "-")` yields
/// `"window-state-main"`. A name that already begins with the separator is
/// not given a second one.
pub fn concat_namespace(namespace: &str, name: &str, separator: &str) -> String {
    if name.starts_with(separator) {
        format!("{namespace}{name}")
    } else {
        format!("{namespace}{separator}{name}")
    }
}

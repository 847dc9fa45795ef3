//! FILENAME: core/export/src/file_name.rs

/// Longest file name `make_file_name` produces, in characters.
pub const MAX_FILE_NAME_CHARS: usize = 200;

/// Builds a file base name from its components: empty components are
/// dropped, the rest lower-cased and joined with `_`. The result is cut to
/// `MAX_FILE_NAME_CHARS` characters, never inside a character.
pub fn make_file_name<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = components
        .into_iter()
        .filter(|c| !c.as_ref().is_empty())
        .map(|c| c.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join("_");

    match joined.char_indices().nth(MAX_FILE_NAME_CHARS) {
        Some((cut, _)) => joined[..cut].to_string(),
        None => joined,
    }
}

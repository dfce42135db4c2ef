/// Longest shared directory prefix of the given paths.
///
/// The common character prefix is cut back to its last `/`; when the
/// prefix contains no separator it is returned as-is. No paths -> empty.
pub fn common_directory_path(paths: &[&str]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    let mut prefix = String::new();
    for (i, c) in first.chars().enumerate() {
        if rest.iter().any(|path| path.chars().nth(i) != Some(c)) {
            break;
        }
        prefix.push(c);
    }

    if let Some(pos) = prefix.rfind('/') {
        prefix.truncate(pos + 1);
    }
    prefix
}

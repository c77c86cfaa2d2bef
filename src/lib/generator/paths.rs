//! Conversion of the absolute, forward slash paths of the build model into the
//! form that the IDE expects in its files: relative to `$PROJ_DIR$` when possible,
//! and always with DOS style separators.

use crate::utils::constants::macros::PROJ_DIR;

const SEPARATOR: char = '/';
const IDE_SEPARATOR: &str = "\\";
const ASCENT: &str = "../";

/// Converts `path` into a path relative to `root` expressed through the `$PROJ_DIR$`
/// macro (ie: `C:/dir/dir/file.c` -> `$PROJ_DIR$\..\..\dir\file.c`).
///
/// When both paths don't live in the same volume, no relative path is possible, and
/// `path` is returned with only its separators converted.
///
/// ```rust
/// use ewgen::generator::paths::canonicalize;
///
/// assert_eq!(canonicalize("C:/proj", "C:/proj/src/a.c"), "$PROJ_DIR$\\src\\a.c");
/// assert_eq!(canonicalize("C:/proj/sub", "C:/proj/other/a.c"), "$PROJ_DIR$\\..\\other\\a.c");
/// assert_eq!(canonicalize("C:/proj", "D:/other/a.c"), "D:\\other\\a.c");
/// ```
pub fn canonicalize(root: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    // The trailing separator ensures that we always match complete leafnames
    let mut root = format!("{}{SEPARATOR}", root.trim_end_matches(SEPARATOR));
    let path = format!("{}{SEPARATOR}", path.trim_end_matches(SEPARATOR));

    let mut result = match (volume_of(&root), volume_of(&path)) {
        (Some(root_volume), Some(path_volume)) if root_volume == path_volume => {
            let mut relative = format!("{PROJ_DIR}{SEPARATOR}");
            loop {
                if let Some(remainder) = path.strip_prefix(root.as_str()) {
                    relative.push_str(remainder);
                    break relative;
                }
                relative.push_str(ASCENT);
                match root[..root.len() - 1].rfind(SEPARATOR) {
                    Some(idx) => root.truncate(idx + 1),
                    None => break path.clone(),
                }
            }
        }
        _ => path.clone(),
    };

    result.pop();
    result.replace(SEPARATOR, IDE_SEPARATOR)
}

/// The leading volume marker of an absolute path: a drive (`C:/`) or the
/// POSIX root (`/`). Anything else can't be made relative to another path
fn volume_of(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    match bytes {
        [drive, b':', b'/', ..] if drive.is_ascii_alphabetic() => Some(&path[..3]),
        [b'/', b'/', ..] => None,
        [b'/', ..] => Some(&path[..1]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_under_root() {
        assert_eq!(canonicalize("C:/proj", "C:/proj/src/a.c"), "$PROJ_DIR$\\src\\a.c");
        assert_eq!(
            canonicalize("C:/proj/build", "C:/proj/build/gen/x.c"),
            "$PROJ_DIR$\\gen\\x.c"
        );
    }

    #[test]
    fn test_sibling_of_root() {
        assert_eq!(
            canonicalize("C:/proj/sub", "C:/proj/other/a.c"),
            "$PROJ_DIR$\\..\\other\\a.c"
        );
        assert_eq!(
            canonicalize("C:/work/fw/build/app", "C:/work/fw/src/main.c"),
            "$PROJ_DIR$\\..\\..\\src\\main.c"
        );
    }

    #[test]
    fn test_path_equal_to_root_is_the_bare_macro() {
        assert_eq!(canonicalize("C:/proj", "C:/proj"), "$PROJ_DIR$");
    }

    #[test]
    fn test_ancestor_of_root_is_only_ascents() {
        assert_eq!(canonicalize("C:/proj/sub", "C:/proj"), "$PROJ_DIR$\\..");
        assert_eq!(canonicalize("C:/a/b/c", "C:/"), "$PROJ_DIR$\\..\\..\\..");
    }

    #[test]
    fn test_partial_leafnames_are_not_matched() {
        assert_eq!(
            canonicalize("C:/proj", "C:/project/a.c"),
            "$PROJ_DIR$\\..\\project\\a.c"
        );
    }

    #[test]
    fn test_different_volumes_are_not_related() {
        assert_eq!(canonicalize("C:/proj", "D:/other/a.c"), "D:\\other\\a.c");
        assert_eq!(canonicalize("C:/proj", "/usr/include"), "\\usr\\include");
    }

    #[test]
    fn test_posix_root_is_a_volume() {
        assert_eq!(
            canonicalize("/home/dev/fw/build", "/home/dev/fw/src/main.c"),
            "$PROJ_DIR$\\..\\src\\main.c"
        );
    }

    #[test]
    fn test_tokens_without_volume_only_change_separators() {
        assert_eq!(canonicalize("C:/proj", "-o"), "-o");
        assert_eq!(canonicalize("C:/proj", "out/file.bin"), "out\\file.bin");
        assert_eq!(canonicalize("C:/proj", "//server/share/a.c"), "\\\\server\\share\\a.c");
    }

    #[test]
    fn test_results_under_root_have_no_ascents() {
        let root = "C:/proj/fw";
        for path in ["C:/proj/fw/a.c", "C:/proj/fw/x/y/z.s", "C:/proj/fw/inc"] {
            assert!(!canonicalize(root, path).contains(".."));
        }
    }
}

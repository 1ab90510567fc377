/// Convert Windows-style separators to POSIX separators.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Fold `.` and `..` segments and duplicate separators out of a path.
pub fn clean_path(path: &str) -> String {
    let normalized = normalize_separators(path);

    // Windows drive prefix (e.g. `C:`)
    let is_windows_absolute = normalized.len() >= 2 && normalized.as_bytes()[1] == b':';
    let is_unix_absolute = normalized.starts_with('/');

    let (drive_prefix, path_part) = if is_windows_absolute {
        normalized.split_at(2)
    } else {
        ("", normalized.as_str())
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in path_part.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if *last != "..") {
                    segments.pop();
                } else if !is_windows_absolute && !is_unix_absolute {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");

    if is_windows_absolute {
        format!("{}/{}", drive_prefix, joined)
    } else if is_unix_absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Whether `path` is absolute in either POSIX or Windows form.
pub fn is_absolute(path: &str) -> bool {
    let normalized = normalize_separators(path);
    normalized.starts_with('/') || (normalized.len() >= 2 && normalized.as_bytes()[1] == b':')
}

/// Right-to-left resolution of `paths` against `cwd`, folding the result with [`clean_path`].
pub fn resolve_against(cwd: &str, paths: &[&str]) -> String {
    let mut resolved = String::new();
    for path in paths.iter().rev() {
        if path.is_empty() {
            continue;
        }
        resolved = if resolved.is_empty() {
            normalize_separators(path)
        } else {
            format!("{}/{}", normalize_separators(path), resolved)
        };
        if is_absolute(path) {
            return clean_path(&resolved);
        }
    }
    if resolved.is_empty() {
        clean_path(cwd)
    } else {
        clean_path(&format!("{}/{}", cwd, resolved))
    }
}

/// `to` relative to `from` when `to` lies below `from`.
pub fn relative_below(from: &str, to: &str) -> Option<String> {
    let from = clean_path(from);
    let to = clean_path(to);
    if from == to {
        return Some(String::new());
    }
    let prefix = if from.ends_with('/') {
        from
    } else {
        format!("{}/", from)
    };
    to.strip_prefix(&prefix).map(str::to_string)
}

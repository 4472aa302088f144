//! Project walk backend
//!
//! Depth-first walk with explicit recursion. Each directory is listed once
//! and its subdirectories are checked against the ignore set before they are
//! opened, so an ignored directory is never listed and nothing beneath it is
//! yielded or read. Within a directory, files come before subdirectories,
//! each sorted by name.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::vec;
use thiserror::Error;

use crate::core::file_reader::ReadError;
use crate::core::filter::{is_ignored_dir, is_useful_file};
use crate::core::paths::{make_relative, normalize_path};

/// A directory that could not be listed
#[derive(Debug, Error)]
#[error("cannot list {path:?}: {source}")]
pub struct WalkError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A file accepted by the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path usable for opening (root-joined)
    pub path: PathBuf,
    /// Path relative to the root
    pub rel: PathBuf,
}

impl SourceFile {
    /// Relative path as written into the dump, '/'-separated
    ///
    /// Fails when the path is not valid UTF-8, since it could not be written
    /// into the dump without inventing a name that does not exist on disk.
    pub fn rel_path(&self) -> Result<String, ReadError> {
        self.rel
            .to_str()
            .map(|s| s.replace('\\', "/"))
            .ok_or(ReadError::PathEncoding)
    }

    /// Relative path for console messages (lossy)
    pub fn display_path(&self) -> String {
        normalize_path(&self.rel)
    }
}

/// What the walk found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A file to dump
    File(SourceFile),
    /// An ignored directory that was not opened
    Pruned(String),
    /// A file rejected by name or extension
    Rejected(String),
}

/// One entry of a directory listing
#[derive(Debug)]
struct Listed {
    path: PathBuf,
    name: OsString,
    is_dir: bool,
    is_symlink: bool,
}

/// Iterator over the walk events under a root
pub struct ProjectWalk {
    root: PathBuf,
    started: bool,
    stack: Vec<vec::IntoIter<Listed>>,
}

impl ProjectWalk {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            started: false,
            stack: Vec::new(),
        }
    }

    fn relative(&self, path: &Path) -> String {
        make_relative(path, &self.root).unwrap_or_else(|| normalize_path(path))
    }

    /// List a directory and push its entries, files first, each group by name
    fn descend(&mut self, dir: &Path) -> Result<(), WalkError> {
        let mut listing = list_dir(dir).map_err(|source| WalkError {
            path: dir.to_path_buf(),
            source,
        })?;
        listing.sort_by(|a, b| a.is_dir.cmp(&b.is_dir).then_with(|| a.name.cmp(&b.name)));
        self.stack.push(listing.into_iter());
        Ok(())
    }

    fn classify(&mut self, entry: Listed) -> Option<Result<WalkEvent, WalkError>> {
        let name = entry.name.to_string_lossy().into_owned();

        if entry.is_dir {
            if is_ignored_dir(&name) {
                return Some(Ok(WalkEvent::Pruned(self.relative(&entry.path))));
            }
            return self.descend(&entry.path).err().map(Err);
        }

        // Symlinked directories are neither followed nor read as files
        if entry.is_symlink && entry.path.is_dir() {
            return None;
        }

        if !is_useful_file(&name) {
            return Some(Ok(WalkEvent::Rejected(self.relative(&entry.path))));
        }

        let rel = entry
            .path
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| entry.path.clone());
        Some(Ok(WalkEvent::File(SourceFile {
            path: entry.path,
            rel,
        })))
    }
}

impl Iterator for ProjectWalk {
    type Item = Result<WalkEvent, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            // The root itself is never pruned
            let root = self.root.clone();
            if let Err(err) = self.descend(&root) {
                return Some(Err(err));
            }
        }

        loop {
            let next = self.stack.last_mut()?.next();
            let entry = match next {
                Some(entry) => entry,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            if let Some(event) = self.classify(entry) {
                return Some(event);
            }
        }
    }
}

fn list_dir(dir: &Path) -> io::Result<Vec<Listed>> {
    let mut listing = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // d_type from the listing; the child is not opened or followed
        let file_type = entry.file_type()?;
        listing.push(Listed {
            path: entry.path(),
            name: entry.file_name(),
            is_dir: file_type.is_dir(),
            is_symlink: file_type.is_symlink(),
        });
    }
    Ok(listing)
}

/// Collect the files to dump under a root, dropping other events and errors
#[cfg(test)]
pub fn useful_files(root: &Path) -> Vec<String> {
    ProjectWalk::new(root)
        .filter_map(|event| match event {
            Ok(WalkEvent::File(file)) => file.rel_path().ok(),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_walk_empty_dir() {
        let temp = tempdir().unwrap();
        let events: Vec<_> = ProjectWalk::new(temp.path()).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn test_walk_missing_root_is_error() {
        let temp = tempdir().unwrap();
        let events: Vec<_> = ProjectWalk::new(&temp.path().join("missing")).collect();
        assert_eq!(events.len(), 1);
        let err = events.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_walk_filters_files() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("src/app.ts"), "a");
        write_file(&temp.path().join("README.md"), "c");
        write_file(&temp.path().join("package-lock.json"), "{}");
        write_file(&temp.path().join("main.rs"), "fn main() {}");

        assert_eq!(useful_files(temp.path()), vec!["README.md", "src/app.ts"]);
    }

    #[test]
    fn test_walk_prunes_ignored_dirs_at_any_depth() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("node_modules/x/y.js"), "b");
        write_file(&temp.path().join("packages/web/node_modules/z.js"), "b");
        write_file(&temp.path().join("packages/web/dist/bundle.js"), "b");
        write_file(&temp.path().join("a/b/c/.git/config.json"), "b");
        write_file(&temp.path().join("a/b/c/keep.ts"), "k");
        write_file(&temp.path().join("packages/web/index.ts"), "i");

        assert_eq!(
            useful_files(temp.path()),
            vec!["a/b/c/keep.ts", "packages/web/index.ts"]
        );
    }

    #[test]
    fn test_walk_never_opens_ignored_dir() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("node_modules/x/y.js"), "b");
        write_file(&temp.path().join("app.ts"), "a");

        let ignored = temp.path().join("node_modules");
        let old = std::time::UNIX_EPOCH + std::time::Duration::from_secs(946_684_800);
        fs::File::open(&ignored)
            .unwrap()
            .set_times(fs::FileTimes::new().set_accessed(old))
            .unwrap();
        let before = fs::metadata(&ignored).unwrap().accessed().unwrap();

        assert_eq!(useful_files(temp.path()), vec!["app.ts"]);

        let after = fs::metadata(&ignored).unwrap().accessed().unwrap();
        assert_eq!(before, after);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_unreadable_ignored_dir_is_still_pruned() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        write_file(&temp.path().join("dist/out.js"), "b");
        write_file(&temp.path().join("app.ts"), "a");
        let ignored = temp.path().join("dist");
        fs::set_permissions(&ignored, fs::Permissions::from_mode(0o000)).unwrap();

        let events: Vec<_> = ProjectWalk::new(temp.path()).collect();
        fs::set_permissions(&ignored, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(events.iter().all(|event| event.is_ok()));
        assert!(events
            .iter()
            .any(|event| matches!(event, Ok(WalkEvent::Pruned(p)) if p == "dist")));
    }

    #[test]
    fn test_walk_reports_pruned_dirs() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("build/out.js"), "b");
        write_file(&temp.path().join("src/public/logo.css"), "b");

        let pruned: Vec<String> = ProjectWalk::new(temp.path())
            .filter_map(|event| match event {
                Ok(WalkEvent::Pruned(path)) => Some(path),
                _ => None,
            })
            .collect();

        assert_eq!(pruned, vec!["build", "src/public"]);
    }

    #[test]
    fn test_walk_reports_rejected_files() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("yarn.lock"), "");
        write_file(&temp.path().join("app.ts"), "");

        let events: Vec<WalkEvent> = ProjectWalk::new(temp.path())
            .map(|event| event.unwrap())
            .collect();

        assert_eq!(events.len(), 2);
        assert!(
            matches!(&events[0], WalkEvent::File(f) if f.rel_path().unwrap() == "app.ts")
        );
        assert_eq!(events[1], WalkEvent::Rejected("yarn.lock".to_string()));
    }

    #[test]
    fn test_walk_files_before_subdirs() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("b.ts"), "");
        write_file(&temp.path().join("a/z.ts"), "");
        write_file(&temp.path().join("a/m/n.ts"), "");
        write_file(&temp.path().join("a.ts"), "");
        write_file(&temp.path().join("c/d.ts"), "");
        write_file(&temp.path().join("z.md"), "");

        assert_eq!(
            useful_files(temp.path()),
            vec!["a.ts", "b.ts", "z.md", "a/z.ts", "a/m/n.ts", "c/d.ts"]
        );
    }

    #[test]
    fn test_walk_root_named_like_ignored_dir_is_scanned() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("build");
        write_file(&root.join("index.ts"), "x");
        write_file(&root.join("dist/skip.ts"), "x");

        assert_eq!(useful_files(&root), vec!["index.ts"]);
    }

    #[test]
    fn test_walk_file_named_like_ignored_dir_is_filtered_by_extension() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("dist"), "not a dir");
        write_file(&temp.path().join("src/build.ts"), "x");

        assert_eq!(useful_files(temp.path()), vec!["src/build.ts"]);
    }

    #[test]
    fn test_walk_paths_are_openable() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("src/app.ts"), "a");

        let files: Vec<SourceFile> = ProjectWalk::new(temp.path())
            .filter_map(|event| match event {
                Ok(WalkEvent::File(file)) => Some(file),
                _ => None,
            })
            .collect();

        assert_eq!(files.len(), 1);
        assert_eq!(fs::read_to_string(&files[0].path).unwrap(), "a");
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_dir_symlinks() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("real/app.ts"), "a");
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link.ts")).unwrap();

        assert_eq!(useful_files(temp.path()), vec!["real/app.ts"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_non_utf8_name_has_no_rel_path() {
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        let name = std::ffi::OsStr::from_bytes(b"bad\xff.ts");
        fs::write(temp.path().join(name), "x").unwrap();

        let files: Vec<SourceFile> = ProjectWalk::new(temp.path())
            .filter_map(|event| match event {
                Ok(WalkEvent::File(file)) => Some(file),
                _ => None,
            })
            .collect();

        assert_eq!(files.len(), 1);
        assert!(matches!(files[0].rel_path(), Err(ReadError::PathEncoding)));
        assert_eq!(files[0].display_path(), "bad\u{FFFD}.ts");
    }
}

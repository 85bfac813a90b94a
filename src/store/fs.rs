// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filesystem capability used by the codec.
//!
//! The drawing core only ever needs four operations, so they are a trait: [`LocalFs`] talks to the
//! real disk, [`MemoryFs`] keeps files in memory for headless sessions and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One line as stored; the error keeps the raw bytes of a line that is not UTF-8.
pub type StoredLine = Result<String, FromUtf8Error>;

pub trait DrawingFs {
    fn exists(&self, path: &Path) -> bool;

    /// Lines without their `\n` / `\r\n` terminators, decoded one at a time.
    fn read_lines(&self, path: &Path) -> io::Result<Vec<StoredLine>>;

    /// Replaces the file with `lines`, each terminated by `\n`.
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;

    /// Removes the file; `Ok(false)` when there was nothing to remove.
    fn delete(&self, path: &Path) -> io::Result<bool>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Also flushes the file contents and the directory entry to stable storage where the
    /// platform allows it.
    Durable,
}

#[derive(Debug, Default, Clone)]
pub struct LocalFs {
    durability: WriteDurability,
}

impl LocalFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }
}

impl DrawingFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<StoredLine>> {
        Ok(split_lines(&fs::read(path)?))
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let capacity = lines.iter().map(|line| line.len() + 1).sum();
        let mut contents = String::with_capacity(capacity);
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        write_atomic(path, contents.as_bytes(), self.durability)
    }

    fn delete(&self, path: &Path) -> io::Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }
}

fn split_lines(bytes: &[u8]) -> Vec<StoredLine> {
    let mut lines: Vec<StoredLine> = bytes
        .split(|&byte| byte == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8(line.to_vec())
        })
        .collect();
    // A trailing terminator (or an empty file) leaves one empty segment behind.
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(file_name) = path.file_name() else {
        return Err(io::Error::other("path has no file name"));
    };

    fs::create_dir_all(parent)?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(io::Error::other("refusing to write through symlink"));
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".glyphpad.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)?;
    let written = file.write_all(contents).and_then(|()| {
        if durability == WriteDurability::Durable {
            file.sync_all()
        } else {
            Ok(())
        }
    });
    drop(file);
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    if let Err(err) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        fs::File::open(parent)?.sync_all()?;
    }

    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

/// In-memory files keyed by path.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, Vec<String>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, lines: impl IntoIterator<Item = String>) {
        self.files
            .borrow_mut()
            .insert(path.into(), lines.into_iter().collect());
    }

    pub fn lines(&self, path: &Path) -> Option<Vec<String>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl DrawingFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<StoredLine>> {
        self.lines(path)
            .map(|lines| lines.into_iter().map(Ok).collect())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }

    fn delete(&self, path: &Path) -> io::Result<bool> {
        Ok(self.files.borrow_mut().remove(path).is_some())
    }
}

impl<F: DrawingFs + ?Sized> DrawingFs for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<StoredLine>> {
        (**self).read_lines(path)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        (**self).write_lines(path, lines)
    }

    fn delete(&self, path: &Path) -> io::Result<bool> {
        (**self).delete(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{split_lines, DrawingFs, LocalFs, MemoryFs, WriteDurability};
    use crate::store::testing::TempDir;
    use rstest::rstest;
    use std::path::Path;

    fn texts(fs: &impl DrawingFs, path: &Path) -> Vec<String> {
        fs.read_lines(path)
            .expect("read lines")
            .into_iter()
            .map(|line| line.expect("utf-8 line"))
            .collect()
    }

    #[test]
    fn local_fs_writes_lines_with_trailing_newlines() {
        let tmp = TempDir::new("local-fs-write");
        let path = tmp.path().join("d.txt");
        let fs = LocalFs::new();

        fs.write_lines(&path, &["a".to_owned(), "b".to_owned()])
            .expect("write");

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "a\nb\n");
        assert_eq!(texts(&fs, &path), vec!["a", "b"]);
    }

    #[test]
    fn local_fs_overwrites_and_leaves_no_temp_files() {
        let tmp = TempDir::new("local-fs-overwrite");
        let path = tmp.path().join("d.txt");
        let fs = LocalFs::new().with_durability(WriteDurability::Durable);

        fs.write_lines(&path, &["old".to_owned()]).expect("write");
        fs.write_lines(&path, &["new".to_owned()]).expect("rewrite");

        assert_eq!(texts(&fs, &path), vec!["new"]);
        let entries = std::fs::read_dir(tmp.path()).expect("read dir").count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn local_fs_delete_reports_absence() {
        let tmp = TempDir::new("local-fs-delete");
        let path = tmp.path().join("d.txt");
        let fs = LocalFs::new();

        assert!(!fs.delete(&path).expect("delete missing"));
        fs.write_lines(&path, &[]).expect("write");
        assert!(fs.exists(&path));
        assert!(fs.delete(&path).expect("delete"));
        assert!(!fs.exists(&path));
    }

    #[test]
    fn local_fs_reads_crlf_files() {
        let tmp = TempDir::new("local-fs-crlf");
        let path = tmp.path().join("d.txt");
        std::fs::write(&path, "1,1,a,1\r\n2,2,b,2\r\n").expect("seed");

        assert_eq!(texts(&LocalFs::new(), &path), vec!["1,1,a,1", "2,2,b,2"]);
    }

    #[test]
    fn local_fs_decodes_each_line_on_its_own() {
        let tmp = TempDir::new("local-fs-bad-byte");
        let path = tmp.path().join("d.txt");
        std::fs::write(&path, b"0,0,a,15\n1,0,\xff,15\r\n2,0,c,1\n").expect("seed");

        let lines = LocalFs::new().read_lines(&path).expect("read");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_deref(), Ok("0,0,a,15"));
        let bad = lines[1].as_ref().expect_err("invalid utf-8");
        assert_eq!(bad.as_bytes(), b"1,0,\xff,15");
        assert_eq!(lines[2].as_deref(), Ok("2,0,c,1"));
    }

    #[rstest]
    #[case(b"", &[])]
    #[case(b"a", &["a"])]
    #[case(b"a\n", &["a"])]
    #[case(b"a\r\n\r\nb", &["a", "", "b"])]
    #[case(b"a\n\n", &["a", ""])]
    fn split_lines_matches_text_line_rules(#[case] bytes: &[u8], #[case] expected: &[&str]) {
        let lines: Vec<String> = split_lines(bytes)
            .into_iter()
            .map(|line| line.expect("utf-8 line"))
            .collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn memory_fs_behaves_like_a_file_map() {
        let fs = MemoryFs::new();
        let path = Path::new("x.txt");

        assert!(!fs.exists(path));
        assert!(fs.read_lines(path).is_err());
        fs.write_lines(path, &["1,1,a,1".to_owned()]).expect("write");
        assert_eq!(texts(&fs, path), vec!["1,1,a,1"]);
        assert!(fs.delete(path).expect("delete"));
        assert!(!fs.delete(path).expect("delete again"));
    }
}

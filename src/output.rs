//! Output management module
//!
//! Writes anagram groups as comma-joined lines, followed by the summary line,
//! to stdout or a file with buffering.

use crate::grouper::AnagramGroup;

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the groups are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Open the target for writing (files are created or truncated)
    pub fn open(&self, buffer_size: usize) -> anyhow::Result<GroupWriter<Box<dyn Write>>> {
        let inner: Box<dyn Write> = match self {
            Self::Stdout => Box::new(io::stdout().lock()),
            Self::File(path) => {
                ensure_parent_dir(path)?;
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| anyhow::anyhow!("Cannot create output file {:?}: {}", path, e))?;
                Box::new(file)
            }
        };

        Ok(GroupWriter::new(inner, buffer_size))
    }
}

/// The closing line of every run
pub fn summary_line(min_letters: i64, match_count: usize) -> String {
    format!(
        "Total valid words with at least {} letters  = {}",
        min_letters, match_count
    )
}

/// Buffered writer for anagram groups
pub struct GroupWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl<W: Write> GroupWriter<W> {
    pub fn new(inner: W, buffer_size: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, inner),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    pub fn write_group(&mut self, group: &AnagramGroup<'_>) -> anyhow::Result<()> {
        self.write_line(&group.to_string())
    }

    /// Write every group, optionally in alphabetical line order
    pub fn write_groups(&mut self, groups: &[AnagramGroup<'_>], sort: bool) -> anyhow::Result<()> {
        if !sort {
            for group in groups {
                self.write_group(group)?;
            }
            return Ok(());
        }

        let mut lines: Vec<String> = groups.iter().map(|g| g.to_string()).collect();
        lines.sort_unstable();
        for line in &lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    pub fn write_summary(&mut self, min_letters: i64, match_count: usize) -> anyhow::Result<()> {
        self.write_line(&summary_line(min_letters, match_count))
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl<W: Write> Drop for GroupWriter<W> {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Ensure the directory holding `path` exists
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::get_anagrams;
    use tempfile::TempDir;

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(4, 12),
            "Total valid words with at least 4 letters  = 12"
        );
        assert_eq!(
            summary_line(-1, 0),
            "Total valid words with at least -1 letters  = 0"
        );
    }

    #[test]
    fn test_write_groups() {
        let words = ["evil", "vile", "live", "veil"];
        let report = get_anagrams(&words, 4);

        let mut writer = GroupWriter::new(Vec::new(), 1024);
        writer.write_groups(&report.groups, false).unwrap();
        writer.write_summary(4, report.match_count).unwrap();
        writer.flush().unwrap();

        let content = String::from_utf8(writer.get_ref().clone()).unwrap();
        assert_eq!(
            content,
            "evil,vile,live,veil\n\
             vile,evil,live,veil\n\
             live,evil,vile,veil\n\
             veil,evil,vile,live\n\
             Total valid words with at least 4 letters  = 4\n"
        );
        assert_eq!(writer.lines_written(), 5);
        assert_eq!(writer.bytes_written(), content.len() as u64);
    }

    #[test]
    fn test_sorted_groups() {
        let words = ["evil", "vile", "live", "veil"];
        let report = get_anagrams(&words, 4);

        let mut writer = GroupWriter::new(Vec::new(), 1024);
        writer.write_groups(&report.groups, true).unwrap();
        writer.flush().unwrap();

        let content = String::from_utf8(writer.get_ref().clone()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "evil,vile,live,veil");
        assert_eq!(lines[3], "vile,evil,live,veil");
    }

    #[test]
    fn test_file_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("anagrams.txt");

        let target = OutputTarget::from_option(Some(path.clone()));
        let mut writer = target.open(1024).unwrap();
        writer.write_line("stop,pots,tops").unwrap();
        writer.write_summary(4, 1).unwrap();
        drop(writer);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "stop,pots,tops\nTotal valid words with at least 4 letters  = 1\n"
        );
    }

    #[test]
    fn test_stdout_target() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
    }
}

//! Dictionary loading
//!
//! Reads a newline-separated word file into memory, one word per line, with
//! automatic encoding detection and optional case folding.

use crate::filter::PatternFilter;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Bytes sampled from the head of a file for encoding detection
const SAMPLE_SIZE: usize = 64 * 1024;

/// Errors raised while loading a dictionary file
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary file does not exist: {path:?}")]
    NotFound { path: PathBuf },

    #[error("dictionary path is not a regular file: {path:?}")]
    NotAFile { path: PathBuf },

    #[error("failed to read dictionary {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DictionaryError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of a file by sampling its content
pub fn detect_encoding(path: &Path) -> Result<EncodingInfo, DictionaryError> {
    let file = File::open(path).map_err(|e| DictionaryError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut sample = vec![0u8; SAMPLE_SIZE];
    let bytes_read = reader
        .read(&mut sample)
        .map_err(|e| DictionaryError::io(path, e))?;
    sample.truncate(bytes_read);

    Ok(detect_sample_encoding(&sample))
}

fn detect_sample_encoding(sample: &[u8]) -> EncodingInfo {
    if sample.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, _)) = Encoding::for_bom(sample) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        };
    }

    // A sample cut inside a multi-byte character still counts as UTF-8
    match std::str::from_utf8(sample) {
        Ok(_) => return EncodingInfo::default(),
        Err(e) if e.error_len().is_none() => return EncodingInfo::default(),
        Err(_) => {}
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    let encoding = detector.guess(None, true);

    EncodingInfo {
        name: encoding.name(),
        confidence: if encoding == encoding_rs::UTF_8 { 0.5 } else { 0.8 },
        encoding,
    }
}

/// How dictionary lines become words
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Lower-case every word before it is handed to the grouper
    pub case_fold: bool,
    /// Keep only words matching this pattern (checked after case folding)
    pub pattern: Option<PatternFilter>,
}

/// A loaded word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub words: Vec<String>,
    pub encoding: &'static str,
    pub bytes: u64,
    /// Non-blank lines rejected by the pattern
    pub skipped: u64,
}

/// Load a newline-separated dictionary file
///
/// Lines are trimmed and blank lines skipped.
pub fn load_dictionary(path: &Path, options: &LoadOptions) -> Result<Dictionary, DictionaryError> {
    if !path.exists() {
        return Err(DictionaryError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(DictionaryError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| DictionaryError::io(path, e))?;
    let bytes = file
        .metadata()
        .map_err(|e| DictionaryError::io(path, e))?
        .len();

    // Zero-length files cannot be mapped on every platform
    if bytes == 0 {
        return Ok(Dictionary {
            words: Vec::new(),
            encoding: EncodingInfo::default().name,
            bytes,
            skipped: 0,
        });
    }

    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| DictionaryError::io(path, e))?;
    let sample = &mmap[..mmap.len().min(SAMPLE_SIZE)];
    let info = detect_sample_encoding(sample);

    log::debug!(
        "Dictionary {:?}: {} bytes, encoding {} (confidence {:.1})",
        path,
        bytes,
        info.name,
        info.confidence
    );

    let mut dictionary = parse_words(&mmap, info.encoding, options);
    dictionary.bytes = bytes;
    Ok(dictionary)
}

/// Split decoded content into words
pub fn parse_words(content: &[u8], encoding: &'static Encoding, options: &LoadOptions) -> Dictionary {
    let mut words = Vec::new();
    let mut skipped = 0u64;

    let (lines, encoding) = decode_lines(content, encoding);
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let word = if options.case_fold {
            line.to_lowercase()
        } else {
            line.to_string()
        };

        if let Some(ref pattern) = options.pattern {
            if !pattern.matches(&word) {
                skipped += 1;
                continue;
            }
        }

        words.push(word);
    }

    Dictionary {
        words,
        encoding: encoding.name(),
        bytes: content.len() as u64,
        skipped,
    }
}

/// Decode `content` and split it into lines, returning the encoding used
///
/// UTF-8 content is split on raw bytes; UTF-16 and legacy encodings are
/// decoded as a whole first since their newlines are not single bytes.
/// Detection only samples the head of the file, so a pure-ASCII head
/// followed by invalid UTF-8 triggers detection over the whole content.
fn decode_lines(content: &[u8], encoding: &'static Encoding) -> (Vec<String>, &'static Encoding) {
    let mut encoding = encoding;

    if encoding == encoding_rs::UTF_8 {
        if let Some(body) = content.strip_prefix(b"\xEF\xBB\xBF") {
            return (split_utf8_lines(body), encoding);
        }
        let head_is_ascii = content[..content.len().min(SAMPLE_SIZE)].is_ascii();
        if !head_is_ascii || std::str::from_utf8(content).is_ok() {
            return (split_utf8_lines(content), encoding);
        }

        let mut detector = EncodingDetector::new();
        detector.feed(content, true);
        encoding = detector.guess(None, true);
        log::debug!("Invalid UTF-8 past the sampled head, decoding as {}", encoding.name());

        if encoding == encoding_rs::UTF_8 {
            return (split_utf8_lines(content), encoding);
        }
    }

    let (decoded, actual, had_errors) = encoding.decode(content);
    if had_errors {
        log::warn!(
            "Encoding errors while decoding dictionary as {}, using lossy conversion",
            actual.name()
        );
    }

    (decoded.lines().map(str::to_string).collect(), actual)
}

fn split_utf8_lines(content: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0;
    let mut lossy_lines = 0u64;

    while position < content.len() {
        let remaining = &content[position..];
        let line_end = memchr::memchr(b'\n', remaining)
            .map(|i| i + 1)
            .unwrap_or(remaining.len());

        let line_bytes = &remaining[..line_end];
        position += line_end;

        let line_bytes = line_bytes.strip_suffix(b"\n").unwrap_or(line_bytes);
        let line_bytes = line_bytes.strip_suffix(b"\r").unwrap_or(line_bytes);

        match std::str::from_utf8(line_bytes) {
            Ok(s) => lines.push(s.to_string()),
            Err(_) => {
                lossy_lines += 1;
                lines.push(String::from_utf8_lossy(line_bytes).into_owned());
            }
        }
    }

    if lossy_lines > 0 {
        log::warn!("{} lines with invalid UTF-8, using lossy conversion", lossy_lines);
    }

    lines
}

//! Annotation extraction.
//!
//! Both extraction modes are derived from one lazy line scan,
//! [`Annotations`], which yields the trimmed payload of every line that
//! contains the sigil, in file order.

use super::cancel::CancellationToken;
use crate::discovery::text_detection::strip_line_ending;
use crate::error::{Result, ScanError};
use crate::types::{DEFAULT_FIRST_LINE_LIMIT, Sigil};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Iterator over the annotation payloads of a line-oriented reader.
///
/// Lines end at `\n`; a trailing `\r` is dropped. Bytes that are not UTF-8
/// are replaced lossily so a stray binary line cannot hide a later
/// annotation. Only the first `line_limit` bytes of a line are kept; the
/// rest of an over-long line is skipped without buffering it. When a
/// cancellation token is attached it is checked before every line read, and
/// the iterator ends after yielding the first error.
pub struct Annotations<'a, R> {
    reader: R,
    sigil: &'a Sigil,
    source: PathBuf,
    cancel: Option<&'a CancellationToken>,
    line_limit: usize,
    line: Vec<u8>,
    done: bool,
}

impl<'a, R: BufRead> Annotations<'a, R> {
    /// `source` names the reader in read errors.
    pub fn new(reader: R, sigil: &'a Sigil, source: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            sigil,
            source: source.into(),
            cancel: None,
            line_limit: DEFAULT_FIRST_LINE_LIMIT,
            line: Vec::new(),
            done: false,
        }
    }

    /// Stop with the token's error as soon as it fires.
    pub fn with_cancellation(mut self, token: Option<&'a CancellationToken>) -> Self {
        self.cancel = token;
        self
    }

    /// Keep at most `limit` bytes of each line.
    pub fn with_line_limit(mut self, limit: usize) -> Self {
        self.line_limit = limit.max(1);
        self
    }

    /// Read the next line into the buffer, dropping whatever exceeds the
    /// line limit. Returns the number of bytes consumed from the reader.
    fn next_line(&mut self) -> std::io::Result<usize> {
        self.line.clear();
        let read = (&mut self.reader)
            .take(self.line_limit as u64)
            .read_until(b'\n', &mut self.line)?;

        if read < self.line_limit || self.line.last() == Some(&b'\n') {
            return Ok(read);
        }

        let skipped = self.reader.skip_until(b'\n')?;
        trace!(path = %self.source.display(), skipped, "Truncated long line");
        Ok(read + skipped)
    }
}

impl<R: BufRead> Iterator for Annotations<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(Err(e)) = self.cancel.map(CancellationToken::check) {
                self.done = true;
                return Some(Err(e));
            }

            match self.next_line() {
                Ok(0) => self.done = true,
                Ok(_) => {
                    strip_line_ending(&mut self.line);
                    let text = String::from_utf8_lossy(&self.line);
                    if let Some(payload) = self.sigil.payload(&text) {
                        trace!(path = %self.source.display(), payload, "Found annotation");
                        return Some(Ok(payload.to_string()));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ScanError::read(&self.source, e)));
                }
            }
        }
        None
    }
}

/// Reads annotations from files.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    sigil: &'a Sigil,
    cancel: Option<&'a CancellationToken>,
    line_limit: usize,
}

impl<'a> Extractor<'a> {
    pub fn new(sigil: &'a Sigil) -> Self {
        Self {
            sigil,
            cancel: None,
            line_limit: DEFAULT_FIRST_LINE_LIMIT,
        }
    }

    /// Check `token` before every line read.
    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Keep at most `limit` bytes of each line.
    pub fn with_line_limit(mut self, limit: usize) -> Self {
        self.line_limit = limit.max(1);
        self
    }

    /// Open `path` and scan it from the start.
    pub fn annotations(&self, path: &Path) -> Result<Annotations<'a, BufReader<File>>> {
        let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
        Ok(Annotations::new(BufReader::new(file), self.sigil, path)
            .with_cancellation(self.cancel)
            .with_line_limit(self.line_limit))
    }

    /// Payload of the first annotated line, or `""` when there is none.
    ///
    /// Reading stops at the first match.
    pub fn first_message(&self, path: &Path) -> Result<String> {
        self.annotations(path)?
            .next()
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Payloads of every annotated line, joined by `\n` in file order.
    pub fn all_messages(&self, path: &Path) -> Result<String> {
        let messages = self.annotations(path)?.collect::<Result<Vec<_>>>()?;
        Ok(messages.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::write_file;
    use std::io::Cursor;
    use std::time::Duration;
    use tempfile::TempDir;

    fn payloads(input: &[u8]) -> Vec<String> {
        let sigil = Sigil::default();
        Annotations::new(Cursor::new(input.to_vec()), &sigil, "test")
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_annotations_in_order() {
        let input = b"#!/bin/sh\n# lx: first\necho hi\n# lx:   second  \n";
        assert_eq!(payloads(input), vec!["first", "second"]);
    }

    #[test]
    fn test_annotations_none() {
        assert!(payloads(b"#!/bin/sh\necho hi\n").is_empty());
        assert!(payloads(b"").is_empty());
    }

    #[test]
    fn test_annotation_without_trailing_newline() {
        assert_eq!(payloads(b"# lx: last line"), vec!["last line"]);
    }

    #[test]
    fn test_annotation_crlf() {
        assert_eq!(payloads(b"rem lx: windows\r\n"), vec!["windows"]);
    }

    #[test]
    fn test_annotation_after_binary_line() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"# lx: still found\n");
        assert_eq!(payloads(&input), vec!["still found"]);
    }

    fn limited_payloads(input: &[u8], limit: usize) -> Vec<String> {
        let sigil = Sigil::default();
        Annotations::new(Cursor::new(input.to_vec()), &sigil, "test")
            .with_line_limit(limit)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_long_line_is_skipped_past() {
        let mut input = b"#!/usr/bin/env node\n".to_vec();
        input.extend(std::iter::repeat_n(b'x', 10_000));
        input.extend_from_slice(b" lx: hidden in the tail\n// lx: after the long line\n");

        assert_eq!(limited_payloads(&input, 64), vec!["after the long line"]);
    }

    #[test]
    fn test_long_line_prefix_is_matched() {
        let mut input = b"// lx: minified bundle ".to_vec();
        input.extend(std::iter::repeat_n(b'x', 1_000));
        input.push(b'\n');

        let payloads = limited_payloads(&input, 32);
        assert_eq!(payloads.len(), 1);
        assert!(payloads[0].starts_with("minified bundle x"));
        assert!(payloads[0].len() < 32);
    }

    #[test]
    fn test_long_last_line_without_newline() {
        let input = vec![b'y'; 500];
        assert!(limited_payloads(&input, 16).is_empty());
    }

    #[test]
    fn test_annotation_empty_payload() {
        assert_eq!(payloads(b"# lx:\n# lx: real\n"), vec!["", "real"]);
    }

    #[test]
    fn test_cancelled_scan_yields_error() {
        let sigil = Sigil::default();
        let token = CancellationToken::new();
        token.cancel();

        let mut annotations = Annotations::new(Cursor::new(b"# lx: hi\n".to_vec()), &sigil, "t")
            .with_cancellation(Some(&token));
        assert!(matches!(annotations.next(), Some(Err(ScanError::Cancelled))));
        assert!(annotations.next().is_none());
    }

    #[test]
    fn test_first_message() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "run.sh",
            b"#!/bin/sh\n# lx: builds the project\n# lx: and tests it\n",
            0o755,
        );

        let sigil = Sigil::default();
        let extractor = Extractor::new(&sigil);
        assert_eq!(extractor.first_message(&path).unwrap(), "builds the project");
    }

    #[test]
    fn test_first_message_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "run.sh", b"#!/bin/sh\necho hi\n", 0o755);

        let sigil = Sigil::default();
        assert_eq!(Extractor::new(&sigil).first_message(&path).unwrap(), "");
    }

    #[test]
    fn test_all_messages_joined() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "run.sh",
            b"#!/bin/sh\n# lx: one\necho\n# lx: two\n# lx: three\n",
            0o755,
        );

        let sigil = Sigil::default();
        assert_eq!(
            Extractor::new(&sigil).all_messages(&path).unwrap(),
            "one\ntwo\nthree"
        );
    }

    #[test]
    fn test_all_messages_none_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "run.sh", b"#!/bin/sh\n", 0o755);

        let sigil = Sigil::default();
        assert_eq!(Extractor::new(&sigil).all_messages(&path).unwrap(), "");
    }

    #[test]
    fn test_custom_sigil() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "run.py", b"# about: py tool\n# lx: no\n", 0o755);

        let sigil = Sigil::new("about:").unwrap();
        assert_eq!(Extractor::new(&sigil).all_messages(&path).unwrap(), "py tool");
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = TempDir::new().unwrap();
        let sigil = Sigil::default();
        let result = Extractor::new(&sigil).first_message(&dir.path().join("nope"));
        assert!(matches!(result, Err(ScanError::Open { .. })));
    }

    #[test]
    fn test_expired_token_stops_extraction() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "run.sh", b"# lx: hi\n", 0o755);

        let sigil = Sigil::default();
        let token = CancellationToken::with_timeout(Duration::ZERO);
        let result = Extractor::new(&sigil)
            .with_cancellation(&token)
            .all_messages(&path);
        assert!(matches!(result, Err(ScanError::TimedOut(_))));
    }
}

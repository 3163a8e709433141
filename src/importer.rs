use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use crate::dictionary::DictionaryIndex;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("corpus '{}' is unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Build a dictionary index from a corpus file on disk.
pub fn import_corpus(path: &Path) -> Result<DictionaryIndex, ImportError> {
    log::info!("importing corpus from {} ...", path.display());

    let file = File::open(path).map_err(|e| ImportError::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let idx = import_reader(file);
    let stats = idx.stats();
    log::info!(
        "finished. indexed {} words under {} codes from {} tokens ({} dropped)",
        stats.words,
        stats.codes,
        stats.tokens,
        stats.dropped
    );

    Ok(idx)
}

/// Build a dictionary index from any reader, line by line. Invalid UTF-8 is
/// replaced with U+FFFD, so only the tokens containing it are dropped.
/// An I/O error stops the import and the index keeps the lines read so far.
pub fn import_reader<R: Read>(r: R) -> DictionaryIndex {
    let mut idx = DictionaryIndex::new();
    let mut reader = BufReader::new(r);
    let mut buf = Vec::new();
    let mut n = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                n += 1;
                idx.add_line(&String::from_utf8_lossy(&buf));
            }
            Err(e) => {
                log::error!("error reading line {}: {}", n + 1, e);
                break;
            }
        }
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines() {
        let idx = import_reader("dog cat\n\ndog\r\nbat-cat".as_bytes());
        assert_eq!(idx.count("dog"), 2);
        assert_eq!(idx.count("cat"), 2);
        assert_eq!(idx.count("bat"), 1);
    }

    #[test]
    fn invalid_utf8_only_drops_the_token() {
        let bytes: &[u8] = b"dog\nca\xfft bat\ncat\n";
        let idx = import_reader(bytes);
        assert_eq!(idx.count("dog"), 1);
        assert_eq!(idx.count("bat"), 1);
        assert_eq!(idx.count("cat"), 1);
        assert_eq!(idx.stats().dropped, 1);
    }

    struct FailAfter<'a> {
        data: &'a [u8],
    }

    impl Read for FailAfter<'_> {
        fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
            if self.data.is_empty() {
                return Err(std::io::Error::other("disk gone"));
            }
            let n = self.data.read(out)?;
            Ok(n)
        }
    }

    #[test]
    fn keeps_lines_before_an_io_error() {
        let idx = import_reader(FailAfter {
            data: b"dog cat\nbat\n",
        });
        assert_eq!(idx.count("dog"), 1);
        assert_eq!(idx.count("cat"), 1);
        assert_eq!(idx.count("bat"), 1);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = import_corpus(Path::new("/nonexistent/corpus.txt")).unwrap_err();
        assert!(matches!(err, ImportError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/corpus.txt"));
    }
}

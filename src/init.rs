use std::path::Path;

use t9suggest::{importer, DictionaryIndex, SuggestionEngine};

/// Initialize logger. `verbose` lowers the default level to debug, which
/// also reports every corpus token dropped during normalization.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let tag = match record.level() {
                log::Level::Info => String::new(),
                l => format!("[{}] ", l),
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.module_path().unwrap_or("t9suggest"),
                record.line().unwrap_or(0),
                tag,
                record.args()
            )
        })
        .init();
}

/// Build the suggestion engine from a corpus file. An unreadable corpus is
/// logged and yields an empty dictionary that matches nothing.
pub fn init_engine(corpus: &Path) -> SuggestionEngine {
    let idx = match importer::import_corpus(corpus) {
        Ok(idx) => idx,
        Err(e) => {
            log::error!("{}", e);
            DictionaryIndex::new()
        }
    };

    if idx.is_empty() {
        log::warn!("dictionary is empty, all queries will return no matches");
    }

    SuggestionEngine::new(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_corpus_gives_empty_engine() {
        let dir = tempfile::tempdir().unwrap();
        let engine = init_engine(&dir.path().join("missing.txt"));
        assert!(engine.index().is_empty());
        assert!(engine.suggest("2287").is_empty());
    }

    #[test]
    fn builds_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("corpus.txt");
        std::fs::write(&p, "cat cats\ncat\n").unwrap();

        let engine = init_engine(&p);
        let s = engine.suggest("228");
        assert_eq!(s.exact[0].word, "cat");
        assert_eq!(s.exact[0].count, 2);
        assert_eq!(s.sorted_completions(), vec!["cats"]);
    }
}

//! Prefix completion over a word list
//!
//! Usage:
//!   cargo run -p complete -- --words data/words.txt be bu
//!   cargo run -p complete -- --words data/words.txt --json --limit 10 st
//!   cargo run -p complete -- --words data/words.txt          (interactive)

use clap::Parser;
use libradix_core::{Config, Corpus, Trie};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "complete")]
#[command(about = "Complete prefixes against a word list")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long)]
    words: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit one JSON object per prefix
    #[arg(long)]
    json: bool,

    /// Maximum completions shown per prefix (0 = unlimited)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Keep completions in trie order instead of sorting
    #[arg(long)]
    unsorted: bool,

    /// Prefixes to complete; reads stdin when none are given
    prefixes: Vec<String>,
}

#[derive(Serialize, Debug)]
struct Report<'a> {
    prefix: &'a str,
    /// `null` when no stored word starts with the prefix
    matches: Option<Vec<&'a str>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    if let Some(limit) = args.limit {
        config.max_completions = limit;
    }
    if args.unsorted {
        config.sort_completions = false;
    }

    let corpus = Corpus::load_word_list(&args.words, &config)?;
    if corpus.is_empty() {
        anyhow::bail!("Word list {} contains no words", args.words.display());
    }
    let trie = Trie::build(corpus);
    info!(words = trie.len(), nodes = trie.node_count(), "trie ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.prefixes.is_empty() {
        for prefix in &args.prefixes {
            write_report(&mut out, &trie, &config, prefix, args.json)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let prefix = line.trim();
        if prefix == ":q" {
            break;
        }
        if prefix.is_empty() {
            continue;
        }
        write_report(&mut out, &trie, &config, prefix, args.json)?;
        out.flush()?;
    }
    Ok(())
}

fn report<'a>(trie: &'a Trie, config: &Config, prefix: &'a str) -> Report<'a> {
    Report {
        prefix,
        matches: trie.complete_words(prefix).map(|words| config.present(words)),
    }
}

fn write_report<W: Write>(
    out: &mut W,
    trie: &Trie,
    config: &Config,
    prefix: &str,
    json: bool,
) -> anyhow::Result<()> {
    let report = report(trie, config, prefix);
    if json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
        return Ok(());
    }
    match &report.matches {
        None => writeln!(out, "{prefix}: (no match)")?,
        Some(words) if words.is_empty() => writeln!(out, "{prefix}: (empty)")?,
        Some(words) => writeln!(out, "{prefix}: {}", words.join(" "))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> Trie {
        Trie::from_words(["bear", "bull", "stock", "bell"])
    }

    fn render(prefix: &str, json: bool) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, &market(), &Config::default(), prefix, json).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_output_distinguishes_no_match_from_empty() {
        assert_eq!(render("be", false), "be: bear bell\n");
        assert_eq!(render("z", false), "z: (no match)\n");
        assert_eq!(render("", false), ": (empty)\n");
    }

    #[test]
    fn json_output() {
        assert_eq!(render("bu", true), "{\"prefix\":\"bu\",\"matches\":[\"bull\"]}\n");
        assert_eq!(render("z", true), "{\"prefix\":\"z\",\"matches\":null}\n");
    }

    #[test]
    fn limit_applies_after_sorting() {
        let trie = market();
        let cfg = Config {
            max_completions: 1,
            ..Config::default()
        };
        assert_eq!(report(&trie, &cfg, "b").matches, Some(vec!["bear"]));
    }

    #[test]
    fn args_parse() {
        let args = Args::parse_from(["complete", "--words", "w.txt", "--json", "-l", "3", "be", "st"]);
        assert_eq!(args.words, PathBuf::from("w.txt"));
        assert!(args.json);
        assert_eq!(args.limit, Some(3));
        assert_eq!(args.prefixes, vec!["be", "st"]);
    }
}

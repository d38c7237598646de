//! Print the shape of the trie built from a word list
//!
//! Usage:
//!   cargo run -p print_trie -- --words data/words.txt
//!   cargo run -p print_trie -- --words data/words.txt --segments

use clap::Parser;
use libradix_core::{Config, Corpus, NodeId, Trie};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "print_trie")]
#[command(about = "Print the compressed trie built from a word list")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long)]
    words: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show (word,start,end) substring references
    #[arg(long)]
    segments: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    if args.segments {
        config.show_segments = true;
    }

    let corpus = Corpus::load_word_list(&args.words, &config)?;
    let trie = Trie::build(corpus);
    print!("{}", render(&trie, config.show_segments));
    Ok(())
}

/// Render the tree depth-first, one node per line.
///
/// Each node shows the text spelled from the root down to it; `*` marks an
/// internal node that also ends a word.
fn render(trie: &Trie, segments: bool) -> String {
    let mut out = String::from("root\n");
    for child in trie.children(trie.root()) {
        render_node(trie, child, 0, segments, &mut out);
    }
    out
}

fn render_node(trie: &Trie, id: NodeId, depth: usize, segments: bool, out: &mut String) {
    let node = trie.node(id);
    let _ = write!(out, "{}|-- {}", "    ".repeat(depth), trie.path_text(id));
    if !node.is_leaf() && node.ends_word() {
        out.push_str(" *");
    }
    if segments {
        if let Some(sub) = node.substr() {
            let _ = write!(out, " {sub}");
        }
    }
    out.push('\n');
    for child in trie.children(id) {
        render_node(trie, child, depth + 1, segments, out);
    }
}

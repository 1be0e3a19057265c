//! WordNetデータベースに問い合わせるユーティリティ
//!
//! このバイナリは、データディレクトリの `data.noun`、`data.verb`、`data.adj`、
//! `data.adv` を読み込み、検索、上位語の走査、距離の計算、類似語の選択を
//! サブコマンドとして提供します。
//!
//! ログの出力は環境変数 `RUST_LOG` で制御します。

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use wordnet_graph::errors::WordnetError;
use wordnet_graph::{DataSources, Database, PartOfSpeech, Synset};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "query", version, about = "Queries a WordNet database")]
struct Cli {
    /// Directory containing data.noun, data.verb, data.adj and data.adv.
    ///
    /// Defaults to the `wordnet` directory under the platform's local data directory.
    #[clap(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 検索対象の語と品詞
#[derive(Parser, Debug)]
struct WordArgs {
    /// Word to look up (case-insensitive; spaces or underscores).
    word: String,

    /// Part of speech (noun, verb, adj, adv, or a one-letter marker).
    #[clap(short = 'p', long)]
    pos: Option<PartOfSpeech>,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// Lists the synsets containing a word, with their glosses.
    Search(WordArgs),

    /// Prints the direct hypernyms of the first synset containing a word.
    Hypernyms(WordArgs),

    /// Prints the hypernym ancestor tree of the first synset containing a word.
    Tree(WordArgs),

    /// Prints the shortest path between two words through a common hypernym.
    Distance {
        /// First word.
        word: String,

        /// Second word.
        other: String,

        /// Part of speech of both words.
        #[clap(short = 'p', long)]
        pos: Option<PartOfSpeech>,
    },

    /// Picks a synset similar to the first synset containing a word.
    Similar {
        #[clap(flatten)]
        target: WordArgs,

        /// Seed of the random number generator. Uses entropy if omitted.
        #[clap(short = 's', long)]
        seed: Option<u64>,
    },
}

/// 実行中に発生する可能性のあるエラー
#[derive(Debug, Error)]
pub enum QueryError {
    /// データベースの読み込み中のエラー
    #[error(transparent)]
    Wordnet(#[from] WordnetError),

    /// 出力中のエラー
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// データディレクトリが決定できないエラー
    #[error("Could not determine the data directory; pass --data-dir.")]
    NoDataDir,

    /// 語が見つからないエラー
    #[error("No synset contains the word {0:?}.")]
    NotFound(String),
}

fn find<'db>(
    db: &'db Database,
    word: &str,
    pos: Option<PartOfSpeech>,
) -> Result<Synset<'db>, QueryError> {
    db.find(&word.replace('_', " "), pos)
        .ok_or_else(|| QueryError::NotFound(word.to_string()))
}

/// メイン関数
///
/// コマンドライン引数をパースしてデータベースを読み込み、
/// 指定されたサブコマンドの結果を標準出力に出力します。
fn main() -> Result<(), QueryError> {
    env_logger::init();
    let cli = Cli::parse();

    let sources = match cli.data_dir {
        Some(dir) => DataSources::new(dir),
        None => DataSources::from_default_dir().ok_or(QueryError::NoDataDir)?,
    };

    eprintln!("Loading the database...");
    let db = Database::from_sources(&sources)?;
    eprintln!("Loaded {} synsets", db.len());

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    match cli.command {
        Command::Search(args) => {
            for s in db.search(&args.word.replace('_', " "), args.pos) {
                writeln!(out, "{}\t{}", s, s.gloss().unwrap_or(""))?;
            }
        }
        Command::Hypernyms(args) => {
            let synset = find(&db, &args.word, args.pos)?;
            for h in synset.hypernyms() {
                writeln!(out, "{h}")?;
            }
        }
        Command::Tree(args) => {
            let synset = find(&db, &args.word, args.pos)?;
            write!(out, "{}", synset.hypernym_ancestors())?;
        }
        Command::Distance { word, other, pos } => {
            let a = find(&db, &word, pos)?;
            let b = find(&db, &other, pos)?;
            match a.hypernym_distance_from(&b) {
                Some(d) => writeln!(out, "{d}")?,
                None => writeln!(out, "no common hypernym")?,
            }
        }
        Command::Similar { target, seed } => {
            let synset = find(&db, &target.word, target.pos)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            writeln!(out, "{}", synset.similar_word(&mut rng))?;
        }
    }

    out.flush()?;
    Ok(())
}

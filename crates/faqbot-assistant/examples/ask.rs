use std::env;
use std::path::{Path, PathBuf};

use faqbot_core::config::{Config, Settings};
use tracing_subscriber::EnvFilter;

// Ask the FAQ assistant one question and print the reply plus live suggestions.
// Usage:
//   cargo run -p faqbot-assistant --example ask -- "how do I apply for a job" \
//     [--config DIR] [--limit 5]
// Without --config the bundled data/faqs.json is used with default settings.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut query = String::new();
    let mut config_dir: Option<PathBuf> = None;
    let mut limit: Option<usize> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() { eprintln!("--config requires a directory"); std::process::exit(2); }
                config_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2; continue;
            }
            "--limit" => {
                if i + 1 >= args.len() { eprintln!("--limit requires a number"); std::process::exit(2); }
                limit = args[i + 1].parse().ok();
                i += 2; continue;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown flag: {}", s); std::process::exit(2);
            }
            s => {
                if query.is_empty() { query = s.to_string(); }
                i += 1; continue;
            }
        }
    }

    if query.is_empty() {
        eprintln!("Usage: cargo run -p faqbot-assistant --example ask -- <question> [--config DIR] [--limit N]");
        std::process::exit(1);
    }

    let config = match config_dir {
        Some(dir) => {
            let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
            Config::load_from(&dir, &env_name)?
        }
        None => {
            let mut settings = Settings::default();
            settings.corpus.path = "data/faqs.json".to_string();
            Config::from_settings(&settings, Path::new(env!("CARGO_MANIFEST_DIR")))
        }
    };
    let limit = limit.unwrap_or(config.get("matcher.suggestion_limit")?);

    println!("FAQ assistant\n=============");
    println!("Corpus: {}", config.corpus_path()?.display());
    println!("Query : {}\n", query);

    let assistant = faqbot_assistant::initialize(&config).await;
    let reply = assistant.find_best(&query);
    println!("[{:?}] matched={} score={:.3}\n{}", reply.kind, reply.matched, reply.score, reply.answer);

    let suggestions = assistant.suggest(&query, limit);
    if !suggestions.is_empty() {
        println!("\nRelated questions:");
        for (i, s) in suggestions.iter().enumerate() {
            println!("{:>2}. {:.3}  {}", i + 1, s.score, s.question);
        }
    }
    Ok(())
}

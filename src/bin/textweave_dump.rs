//! Dump the structure inferred from a glyph document.
//!
//! Reads a JSON file holding an array of pages (each with `glyphs` and
//! optional `beads`), runs the layout engine over it, and prints either the
//! flattened plain text or the full event trace as JSON.
//!
//! Usage:
//!   cargo run --bin textweave_dump -- glyphs.json
//!   cargo run --bin textweave_dump -- --events glyphs.json
//!   cargo run --bin textweave_dump -- --no-articles --pages 2-5 glyphs.json

use std::fs;
use std::path::PathBuf;
use textweave::{
    EngineConfig, InMemorySource, LayoutEngine, PageGlyphs, PlainTextSink, RecordingSink, Result,
};

struct DumpConfig {
    input: PathBuf,
    events: bool,
    engine: EngineConfig,
}

impl DumpConfig {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut events = false;
        let mut engine = EngineConfig::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--events" => {
                    events = true;
                },
                "--no-dedup" => {
                    engine = engine.with_duplicate_suppression(false);
                },
                "--no-articles" => {
                    engine = engine.with_article_separation(false);
                },
                "--pages" => {
                    i += 1;
                    let range = args.get(i)?;
                    let (start, end) = range.split_once('-')?;
                    engine = engine.with_page_range(start.parse().ok()?, end.parse().ok()?);
                },
                path => {
                    input = Some(PathBuf::from(path));
                },
            }
            i += 1;
        }

        Some(Self {
            input: input?,
            events,
            engine,
        })
    }
}

fn run(config: DumpConfig) -> Result<()> {
    let raw = fs::read_to_string(&config.input)?;
    let pages: Vec<PageGlyphs> = serde_json::from_str(&raw)?;
    let mut source = InMemorySource::new(pages);
    let engine = LayoutEngine::new(config.engine);

    if config.events {
        let mut sink = RecordingSink::new();
        engine.process(&mut source, &mut sink)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&sink.events).map_err(textweave::Error::from)?
        );
    } else {
        let mut sink = PlainTextSink::new();
        engine.process(&mut source, &mut sink)?;
        print!("{}", sink.text());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let Some(config) = DumpConfig::from_args() else {
        eprintln!("Usage: textweave_dump [--events] [--no-dedup] [--no-articles] [--pages N-M] <glyphs.json>");
        std::process::exit(2);
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use vmsim::common::types::{DEFAULT_MEMORY_SIZE, DEFAULT_PAGE_SIZE};
use vmsim::trace::read_trace;
use vmsim::{EngineConfig, ReplacementPolicy, TranslationEngine};

const HISTORY_FILE: &str = ".vmsh_history";

const MENU: &str = "
1. Show Segments
2. Show Page Table
3. Show Frames
4. Access Address
5. Show Statistics
0. Exit";

#[derive(Parser)]
#[command(author, version, about = "vmsh - segmented, demand-paged virtual memory simulator")]
struct Cli {
    /// Total logical memory size in bytes
    #[arg(short, long, default_value_t = DEFAULT_MEMORY_SIZE)]
    memory_size: usize,

    /// Page (and frame) size in bytes
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Number of physical frames (defaults to one per page)
    #[arg(short, long)]
    frames: Option<usize>,

    /// Segment names, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "Segment0,Segment1")]
    segments: Vec<String>,

    /// Page replacement policy: fifo or lru
    #[arg(long, default_value = "fifo")]
    policy: ReplacementPolicy,

    /// Log page faults and evictions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu
    Shell,

    /// Translate a single logical address
    Access {
        /// Segment index
        segment: usize,
        /// Offset within the segment
        offset: usize,
    },

    /// Replay an access trace file ("segment offset" per line)
    Trace {
        /// Trace file path
        file: PathBuf,

        /// Only print the final tables and statistics
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the memory layout
    Info,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::new(
            self.memory_size,
            self.page_size,
            self.segments.iter().cloned(),
            self.policy,
        );
        match self.frames {
            Some(frames) => config.with_frame_count(frames),
            None => config,
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run_shell(engine: &mut TranslationEngine) -> Result<()> {
    println!("Virtual Memory Manager Simulator. Type 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        println!("{}", MENU);
        let line = match rl.readline("Enter choice: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        };
        let _ = rl.add_history_entry(&line);

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "1" => println!("\n{}", engine.snapshot_segments()),
            "2" => println!("\n{}", engine.snapshot_page_table()),
            "3" => println!("\n{}", engine.snapshot_frame_table()),
            "4" => prompt_access(&mut rl, engine)?,
            "5" => println!("\n{}", engine.snapshot_statistics()),
            "0" | "exit" | "quit" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice!"),
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn prompt_access(
    rl: &mut Editor<(), DefaultHistory>,
    engine: &mut TranslationEngine,
) -> Result<()> {
    println!("\n{}", engine.snapshot_segments());

    let prompt = format!("Enter segment index (0-{}): ", engine.segment_count() - 1);
    let segment = match rl.readline(&prompt)?.trim().parse::<usize>() {
        Ok(segment) if segment < engine.segment_count() => segment,
        _ => {
            println!("Invalid segment index!");
            return Ok(());
        }
    };

    let limit = engine.segment(segment)?.limit;
    let prompt = format!("Enter offset (0-{}): ", limit - 1);
    let offset = match rl.readline(&prompt)?.trim().parse::<usize>() {
        Ok(offset) => offset,
        Err(_) => {
            println!("Invalid offset!");
            return Ok(());
        }
    };

    match engine.translate(segment, offset) {
        Ok(result) => println!("{}", result),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

fn run_trace(engine: &mut TranslationEngine, file: &Path, quiet: bool) -> Result<()> {
    let requests = read_trace(file)
        .with_context(|| format!("Failed to read trace {}", file.display()))?;

    for (request, result) in requests.iter().zip(engine.translate_batch(&requests)) {
        if quiet {
            continue;
        }
        match result {
            Ok(result) => println!("{}\n", result),
            Err(err) => println!("Error ({} {}): {}\n", request.segment, request.offset, err),
        }
    }

    println!("{}\n", engine.snapshot_page_table());
    println!("{}\n", engine.snapshot_frame_table());
    println!("{}", engine.snapshot_statistics());
    Ok(())
}

fn print_info(engine: &TranslationEngine) {
    println!("Virtual Memory Information:");
    println!("  Page size: {} bytes", engine.page_size());
    println!("  Pages: {}", engine.page_count());
    println!("  Frames: {}", engine.frame_count());
    println!("  Replacement policy: {}", engine.policy());
    println!();
    println!("{}", engine.snapshot_segments());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut engine = TranslationEngine::new(&cli.engine_config())
        .context("Failed to initialize translation engine")?;

    match &cli.command {
        Some(Commands::Shell) | None => run_shell(&mut engine)?,
        Some(Commands::Access { segment, offset }) => {
            let result = engine.translate(*segment, *offset)?;
            println!("{}", result);
        }
        Some(Commands::Trace { file, quiet }) => run_trace(&mut engine, file, *quiet)?,
        Some(Commands::Info) => print_info(&engine),
    }

    Ok(())
}

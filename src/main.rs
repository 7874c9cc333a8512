//! CLI entry point for dirtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{
    ExclusionConfig, OutputConfig, TextEncoding, TraversalConfig, TreeError, TreePrinter,
    parse_max_depth, print_json, render_tree, summary,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Render a directory as a text tree, honoring .gitignore and skipping dependency folders")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep (positive integer; anything else means unlimited)
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<String>,

    /// Directory name to always skip (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Do not skip .git, venv, __pycache__ and node_modules by default
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Do not apply patterns from <PATH>/.gitignore
    #[arg(long = "no-gitignore")]
    no_gitignore: bool,

    /// Also save the tree to FILE (overwritten)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Prefix the saved file with a UTF-8 byte-order mark
    #[arg(long = "bom", requires = "output")]
    bom: bool,

    /// Sort entries by name instead of filesystem order
    #[arg(short = 's', long = "sort")]
    sort: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not print the summary line to stderr
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn exclusions(&self) -> ExclusionConfig {
        let mut exclusions = if self.no_default_excludes {
            ExclusionConfig::empty()
        } else {
            ExclusionConfig::default()
        };
        for name in &self.exclude {
            exclusions.insert(name.clone());
        }
        exclusions
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let max_depth = match args.level.as_deref().map(parse_max_depth) {
        None => None,
        Some(Ok(depth)) => depth,
        Some(Err(e)) => {
            eprintln!("dirtree: warning: {}", e);
            None
        }
    };

    let mut config = TraversalConfig::new(&args.path)
        .with_exclusions(args.exclusions())
        .with_max_depth(max_depth)
        .with_gitignore(!args.no_gitignore)
        .sorted(args.sort)
        .with_encoding(if args.bom {
            TextEncoding::Utf8Bom
        } else {
            TextEncoding::Utf8
        });
    if let Some(ref output) = args.output {
        config = config.with_output(output);
    }

    let outcome = match render_tree(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("dirtree: {}", e);
            process::exit(1);
        }
    };

    let printed = if args.json {
        print_json(&outcome.tree)
    } else {
        TreePrinter::new(OutputConfig {
            use_color: should_use_color(args.color),
        })
        .print(&outcome.tree)
    };
    if let Err(e) = printed {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }

    let mut failed = false;
    for notice in &outcome.notices {
        match notice {
            TreeError::OutputWriteFailed { .. } => {
                eprintln!("dirtree: {}", notice);
                failed = true;
            }
            _ => eprintln!("dirtree: warning: {}", notice),
        }
    }

    if !args.quiet {
        let saved_to = if failed { None } else { args.output.as_deref() };
        eprintln!("{}", summary(&outcome.tree, saved_to));
    }

    if failed {
        process::exit(1);
    }
}

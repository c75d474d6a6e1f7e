//! CLI entry point for canopy

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use canopy::{
    Folder, OutputConfig, Summary, TreeBuilder, TreeFormatter, WalkerConfig, clipboard,
    format_summary, print_json, print_summary,
};
use clap::{Parser, ValueEnum};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "A tree command with depth-scoped ignore rules")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden entries (dotfiles)
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Ignore entries matching pattern (can be used multiple times; a
    /// trailing slash matches directories only)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Do not read .gitignore files
    #[arg(long = "no-gitignore")]
    no_gitignore: bool,

    /// Collect .gitignore files only down to this directory depth
    #[arg(long = "gitignore-depth", value_name = "N")]
    gitignore_depth: Option<usize>,

    /// Stop filtering entirely below this depth
    #[arg(long = "ignore-depth", value_name = "N")]
    ignore_depth: Option<usize>,

    /// Show at most N entries per folder before truncating
    #[arg(long = "max-items", value_name = "N", default_value_t = 50)]
    max_items: usize,

    /// Disable the per-folder entry cap
    #[arg(long = "no-limit")]
    no_limit: bool,

    /// Decorate entries with folder and file emoji
    #[arg(long)]
    emoji: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print aggregate counts after the tree
    #[arg(short, long)]
    summary: bool,

    /// Output the tree (or, with --summary, the summary) as JSON
    #[arg(long)]
    json: bool,

    /// Copy the rendered tree to the clipboard instead of printing it
    #[arg(short, long)]
    copy: bool,

    /// Write the rendered tree to a file instead of printing it
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config = WalkerConfig {
        show_all: args.all,
        max_depth: args.level,
        dirs_only: args.dirs_only,
        extra_ignores: args.ignore.clone(),
        respect_gitignore: !args.no_gitignore,
        gitignore_depth: args.gitignore_depth,
        ignore_depth: args.ignore_depth,
        max_items: if args.no_limit {
            None
        } else {
            Some(args.max_items)
        },
        include_contents: false,
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let mut builder = TreeBuilder::new(config);
    let tree = match builder.build(&root) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("canopy: {}", err);
            process::exit(1);
        }
    };
    for warning in builder.warnings() {
        eprintln!("canopy: warning: {}", warning);
    }

    if let Err(err) = run_output(&args, &tree) {
        eprintln!("canopy: error writing output: {}", err);
        process::exit(1);
    }
}

fn run_output(args: &Args, tree: &Folder) -> io::Result<()> {
    if args.json {
        return if args.summary {
            print_json(&Summary::collect(tree))
        } else {
            print_json(tree)
        };
    }

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
        emoji: args.emoji,
    });

    // --copy and --out capture the output instead of printing it.
    if args.copy || args.out.is_some() {
        let mut content = formatter.format(tree);
        if args.summary {
            content.push_str(&format_summary(&Summary::collect(tree)));
        }
        if let Some(out) = &args.out {
            write_output_file(out, &content)?;
        }
        if args.copy {
            if clipboard::copy_to_clipboard(&content) {
                eprintln!("canopy: output copied to clipboard");
            } else {
                eprintln!(
                    "canopy: warning: could not copy to clipboard; install wl-copy, xclip, or xsel"
                );
            }
        }
        return Ok(());
    }

    formatter.print(tree)?;
    if args.summary {
        print_summary(&Summary::collect(tree))?;
    }
    Ok(())
}

/// Write captured output to `path`, defaulting the extension to `.txt` and
/// fencing the content when the target is a Markdown file.
fn write_output_file(path: &Path, content: &str) -> io::Result<()> {
    let mut path = path.to_path_buf();
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    let payload = if path.extension().is_some_and(|ext| ext == "md") {
        format!("```\n{}```\n", content)
    } else {
        content.to_string()
    };
    fs::write(&path, payload)
}

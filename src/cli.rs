use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "litex-run", about = "Run Litex snippets through the litex executable", version)]
pub struct Cli {
    /// Snippets to run; each argument is passed to `litex -e` as-is.
    #[arg(value_name = "SNIPPET")]
    pub snippets: Vec<String>,

    /// Read a snippet from a file. Can be used multiple times:
    /// --file a.lix --file b.lix
    #[arg(short = 'f', long = "file", action = clap::ArgAction::Append)]
    pub files: Vec<String>,

    /// Number of snippets run concurrently (defaults to LITEX_MAX_WORKERS, then 1).
    #[arg(short = 'j', long = "max-workers", value_parser = clap::value_parser!(usize))]
    pub max_workers: Option<usize>,

    /// Path to the litex executable (defaults to LITEX_PATH, then `litex` on PATH).
    #[arg(long = "litex-path")]
    pub litex_path: Option<String>,

    /// Print results as a JSON array of {success, payload, message}.
    #[arg(long)]
    pub json: bool,

    /// Only print failed snippets.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

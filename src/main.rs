mod cli;
mod logging;
mod printer;
mod utils;

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use litex_runner::{Config, Executor};
use printer::{JsonPrinter, TextPrinter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init();
    let args = cli::Cli::parse();

    let mut cfg = Config::load();
    if let Some(path) = args.litex_path.as_deref() {
        cfg.set("LITEX_PATH", path);
    }
    let max_workers = args.max_workers.unwrap_or_else(|| cfg.max_workers());
    if max_workers == 0 {
        bail!("--max-workers must be at least 1");
    }

    // Positional snippets first, then files; stdin only when nothing else was given.
    let mut codes = args.snippets.clone();
    codes.extend(utils::read_snippet_files(&args.files)?);
    if codes.is_empty() {
        if io::stdin().is_terminal() {
            bail!("No snippets given; pass them as arguments, with --file, or via stdin");
        }
        codes.push(utils::read_stdin_snippet()?);
    }

    let exec = Executor::from_config(&cfg);
    tracing::debug!(program = %exec.program().display(), snippets = codes.len(), max_workers, "resolved run");

    let results = if codes.len() == 1 {
        vec![exec.run(&codes[0]).await]
    } else {
        exec.run_batch(&codes, max_workers)
            .await
            .context("batch run failed")?
    };

    if args.json {
        JsonPrinter.print(&results)?;
    } else {
        let color = !args.no_color && io::stdout().is_terminal();
        TextPrinter { color, quiet: args.quiet }.print(&results);
    }

    if results.iter().all(|r| r.success) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

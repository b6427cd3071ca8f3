//! Printers: colored text and JSON.

use anyhow::Result;
use owo_colors::OwoColorize;

use litex_runner::ExecutionResult;

pub struct TextPrinter {
    pub color: bool,
    pub quiet: bool,
}

impl TextPrinter {
    pub fn print(&self, results: &[ExecutionResult]) {
        let multi = results.len() > 1;
        for (i, r) in results.iter().enumerate() {
            if self.quiet && r.success {
                continue;
            }
            if multi {
                println!("{}", self.header(i, r));
            }
            let body = r.message.trim_end();
            if !body.is_empty() {
                if !r.success && self.color {
                    println!("{}", body.red());
                } else {
                    println!("{}", body);
                }
            }
        }
        if multi {
            let failed = results.iter().filter(|r| !r.success).count();
            let line = format!("{} passed, {} failed", results.len() - failed, failed);
            if !self.color {
                println!("{}", line);
            } else if failed == 0 {
                println!("{}", line.green());
            } else {
                println!("{}", line.yellow());
            }
        }
    }

    fn header(&self, idx: usize, r: &ExecutionResult) -> String {
        let status = if r.success { "ok" } else { "FAILED" };
        let first = r.payload.lines().next().unwrap_or("");
        let head = format!("[{}] {}: {}", idx + 1, status, first);
        match (self.color, r.success) {
            (false, _) => head,
            (true, true) => format!("{}", head.green()),
            (true, false) => format!("{}", head.red()),
        }
    }
}

pub struct JsonPrinter;

impl JsonPrinter {
    pub fn print(&self, results: &[ExecutionResult]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(results)?);
        Ok(())
    }
}

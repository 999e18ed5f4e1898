use colored::Colorize;

use crate::driver::RunSummary;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One line per failure and degradation, failures first.
    pub fn render_diagnostics(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        for failure in &summary.failures {
            let label = match failure.category() {
                Some(category) => format!("error[{category}]"),
                None => "error".to_string(),
            };
            out.push_str(&format!(
                "{} - {}: {:#}\n",
                self.format_path(&failure.tree_path.display().to_string()),
                self.paint_error(&label),
                failure.error
            ));
        }
        for (path, degradation) in &summary.degradations {
            out.push_str(&format!(
                "{} - {}: {degradation}\n",
                self.format_path(&path.display().to_string()),
                self.paint_warning("warning")
            ));
        }
        out
    }

    pub fn render_summary(&self, summary: &RunSummary) -> String {
        let verb = if summary.dry_run {
            "Checked"
        } else {
            "Transpiled"
        };
        let mut line = format!(
            "{verb} {} of {} file(s)",
            summary.outputs.len(),
            summary.total()
        );
        if !summary.degradations.is_empty() {
            line.push_str(&format!(", {} warning(s)", summary.degradations.len()));
        }

        if summary.is_success() {
            if self.color {
                return line.green().bold().to_string();
            }
            return line;
        }

        let failed = format!("{} failed", summary.failures.len());
        format!("{line}, {}", self.paint_error(&failed))
    }

    fn format_path(&self, path: &str) -> String {
        if self.color {
            path.cyan().to_string()
        } else {
            path.to_string()
        }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "../tests/reporter.rs"]
mod tests;

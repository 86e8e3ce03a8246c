use colored::*;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "compact" => Ok(OutputFormat::Compact),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Compact => write!(f, "compact"),
        }
    }
}

/// Report a file whose keys are not yet in the target style
pub fn print_needs_rename(file_path: &Path, style: &str, colored_output: bool) {
    let file_name = file_path.display().to_string();
    if colored_output {
        eprintln!(
            "  {} {} {}",
            "✗".red().bold(),
            file_name.bold(),
            format!("(keys not {} case)", style).dimmed()
        );
    } else {
        eprintln!("  ✗ {} (keys not {} case)", file_name, style);
    }
}

pub fn print_file_error(file_path: &Path, message: &str, colored_output: bool) {
    if colored_output {
        eprintln!(
            "{} {}: {}",
            "Error:".red().bold(),
            file_path.display(),
            message
        );
    } else {
        eprintln!("Error: {}: {}", file_path.display(), message);
    }
}

pub fn print_check_summary(needs_rename: usize, files: &[impl AsRef<Path>], colored: bool) {
    eprintln!();
    if needs_rename == 0 {
        if colored {
            eprintln!("{}", "✓ All keys already match the target style!".green().bold());
        } else {
            eprintln!("✓ All keys already match the target style!");
        }
    } else {
        let file_word = if needs_rename == 1 { "file" } else { "files" };
        if colored {
            eprintln!(
                "{} {} {} of {} would be rewritten",
                "✗".red().bold(),
                needs_rename.to_string().red().bold(),
                file_word,
                files.len()
            );
        } else {
            eprintln!(
                "✗ {} {} of {} would be rewritten",
                needs_rename,
                file_word,
                files.len()
            );
        }
    }
}

pub fn print_write_summary(rewritten: usize, files: &[impl AsRef<Path>], colored: bool) {
    eprintln!();
    if rewritten == 0 {
        if colored {
            eprintln!("{}", "No files needed rewriting!".green().bold());
        } else {
            eprintln!("No files needed rewriting!");
        }
    } else {
        let file_word = if rewritten == 1 { "file" } else { "files" };
        if colored {
            eprintln!(
                "{} {} {} rewritten out of {}",
                "✓".green().bold(),
                rewritten.to_string().green().bold(),
                file_word,
                files.len()
            );
        } else {
            eprintln!("✓ {} {} rewritten out of {}", rewritten, file_word, files.len());
        }
    }
}

pub fn print_failure_summary(failed: usize, files: &[impl AsRef<Path>], colored: bool) {
    let file_word = if failed == 1 { "file" } else { "files" };
    if colored {
        eprintln!(
            "{} {} {} of {} could not be processed",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            file_word,
            files.len()
        );
    } else {
        eprintln!(
            "✗ {} {} of {} could not be processed",
            failed,
            file_word,
            files.len()
        );
    }
}

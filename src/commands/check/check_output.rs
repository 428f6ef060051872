use crate::checker::CheckResult;
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};

pub fn format_output(
    format: OutputFormat,
    results: &[CheckResult],
    color_mode: ColorMode,
    quiet: bool,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_quiet(quiet)
            .format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

/// Writes `output` to stdout, terminated by a single newline.
pub fn write_output(output: &str) -> crate::Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.is_empty() && !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

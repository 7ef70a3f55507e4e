use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn resolve(
    flags: &GlobalFlags,
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_tty && table && !flags.quiet && !no_color,
    };

    // The spinner draws on stderr, so stdout may be redirected to a file.
    let progress = match flags.progress {
        ProgressMode::On => stderr_tty && !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => stderr_tty && !flags.quiet && flags.format != OutputFormat::Json,
    };

    let term_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            color,
            progress: ProgressMode::Auto,
            quiet,
            verbose: false,
        }
    }

    #[test]
    fn auto_color_needs_tty_and_table() {
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), true, true, false, None);
        assert!(prefs.table_color);

        let piped = resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), false, true, false, None);
        assert!(!piped.table_color);

        let json = resolve(&flags(OutputFormat::Json, ColorMode::Always, false), true, true, false, None);
        assert!(!json.table_color);
    }

    #[test]
    fn no_color_env_disables_auto_color() {
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), true, true, true, None);
        assert!(!prefs.table_color);
    }

    #[test]
    fn quiet_disables_spinner() {
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Auto, true), true, true, false, None);
        assert!(!prefs.progress);
    }

    #[test]
    fn narrow_columns_are_ignored() {
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Never, false), true, true, false, Some("20"));
        assert!(prefs.term_width.is_none());
        let wide = resolve(&flags(OutputFormat::Table, ColorMode::Never, false), true, true, false, Some("120"));
        assert_eq!(wide.term_width, Some(120));
    }
}

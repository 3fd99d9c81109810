use super::ViewerConfig;

/// Size of the terminal the image is drawn into, in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: usize,
    pub rows: usize,
}

impl TerminalSize {
    /// Classic VT100: 80x24
    pub const DEFAULT: Self = Self {
        columns: 80,
        rows: 24,
    };

    /// Size of the terminal attached to stdout, then `COLUMNS`/`LINES`,
    /// then [`Self::DEFAULT`].
    pub fn detect() -> Self {
        Self::from_tty()
            .or_else(|| {
                Self::from_env_values(
                    std::env::var("COLUMNS").ok().as_deref(),
                    std::env::var("LINES").ok().as_deref(),
                )
            })
            .unwrap_or(Self::DEFAULT)
    }

    /// Query the terminal on stdout. `None` when stdout is not a terminal.
    pub fn from_tty() -> Option<Self> {
        let (terminal_size::Width(w), terminal_size::Height(h)) =
            terminal_size::terminal_size_of(std::io::stdout())?;
        (w > 0 && h > 0).then_some(Self {
            columns: w as usize,
            rows: h as usize,
        })
    }

    /// Build a size from `COLUMNS`/`LINES` style values.
    ///
    /// A missing or unparsable value falls back to the default for that
    /// axis. `None` when neither value is usable.
    pub fn from_env_values(columns: Option<&str>, lines: Option<&str>) -> Option<Self> {
        let parse = |v: Option<&str>| {
            v.and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
        };
        match (parse(columns), parse(lines)) {
            (None, None) => None,
            (c, r) => Some(Self {
                columns: c.unwrap_or(Self::DEFAULT.columns),
                rows: r.unwrap_or(Self::DEFAULT.rows),
            }),
        }
    }

    /// Apply per-axis overrides from `config` on top of this size.
    pub fn with_overrides(self, config: &ViewerConfig) -> Self {
        Self {
            columns: config.columns.unwrap_or(self.columns),
            rows: config.rows.unwrap_or(self.rows),
        }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_80x24() {
        assert_eq!(
            TerminalSize::default(),
            TerminalSize {
                columns: 80,
                rows: 24
            }
        );
    }

    #[test]
    fn test_env_values_both() {
        let size = TerminalSize::from_env_values(Some("132"), Some("50")).unwrap();
        assert_eq!((size.columns, size.rows), (132, 50));
    }

    #[test]
    fn test_env_values_partial() {
        let size = TerminalSize::from_env_values(Some("100"), None).unwrap();
        assert_eq!((size.columns, size.rows), (100, 24));

        let size = TerminalSize::from_env_values(Some("junk"), Some("40")).unwrap();
        assert_eq!((size.columns, size.rows), (80, 40));
    }

    #[test]
    fn test_env_values_unusable() {
        assert_eq!(TerminalSize::from_env_values(None, None), None);
        assert_eq!(TerminalSize::from_env_values(Some("0"), Some("x")), None);
    }

    #[test]
    fn test_overrides_per_axis() {
        let config = ViewerConfig {
            rows: Some(10),
            ..Default::default()
        };
        let size = TerminalSize::DEFAULT.with_overrides(&config);
        assert_eq!((size.columns, size.rows), (80, 10));
    }
}

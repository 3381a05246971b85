use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ui::layout::Chrome;

/// Persistent defaults. Every field is optional so a file or command line
/// only overrides what it mentions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub min_editor_lines: Option<u16>,
    pub padding_lines: Option<u16>,
    pub status_ttl: Option<u16>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; values in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_editor_lines: other.min_editor_lines.or(self.min_editor_lines),
            padding_lines: other.padding_lines.or(self.padding_lines),
            status_ttl: other.status_ttl.or(self.status_ttl),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// Layout constants with these overrides applied.
    pub fn chrome(&self) -> Chrome {
        let defaults = Chrome::default();
        Chrome {
            min_editor: self.min_editor_lines.unwrap_or(defaults.min_editor),
            padding: self.padding_lines.unwrap_or(defaults.padding),
            ..defaults
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("nyan").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("nyan")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("nyan").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("nyan").join("config");
        }
    }

    PathBuf::from(".nyanrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".nyanrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write `flags` as a defaults file.
///
/// # Errors
///
/// Fails when the file cannot be written, or when the log file path holds
/// whitespace: the file format splits on whitespace, so such a path would
/// not read back.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let spaced_log_file = flags
        .log_file
        .as_ref()
        .filter(|p| p.to_string_lossy().chars().any(char::is_whitespace));
    if let Some(log_file) = spaced_log_file {
        anyhow::bail!(
            "Cannot save --log-file {}: paths with spaces are not supported in saved defaults",
            log_file.display()
        );
    }
    let mut lines = Vec::new();
    lines.push("# nyan defaults (saved with --save)".to_string());
    if let Some(n) = flags.min_editor_lines {
        lines.push(format!("--min-editor-lines {n}"));
    }
    if let Some(n) = flags.padding_lines {
        lines.push(format!("--padding-lines {n}"));
    }
    if let Some(n) = flags.status_ttl {
        lines.push(format!("--status-ttl {n}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pull known flags out of a token list. Unknown tokens (including the
/// program name and the file argument) are skipped, as are numeric flags
/// with unparsable values.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let takes_value = matches!(
            name,
            "--min-editor-lines" | "--padding-lines" | "--status-ttl" | "--log-file"
        );
        if takes_value {
            let value = match inline {
                Some(value) => Some(value),
                None => {
                    i += 1;
                    tokens.get(i).map(String::as_str)
                }
            };
            if let Some(value) = value {
                apply_flag(&mut flags, name, value);
            }
        }
        i += 1;
    }
    flags
}

fn apply_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--min-editor-lines" => flags.min_editor_lines = value.parse().ok(),
        "--padding-lines" => flags.padding_lines = value.parse().ok(),
        "--status-ttl" => flags.status_ttl = value.parse().ok(),
        "--log-file" => flags.log_file = Some(PathBuf::from(value)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "nyan".to_string(),
            "--min-editor-lines".to_string(),
            "8".to_string(),
            "--padding-lines=2".to_string(),
            "--status-ttl".to_string(),
            "12".to_string(),
            "--log-file=nyan.log".to_string(),
            "notes.txt".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.min_editor_lines, Some(8));
        assert_eq!(flags.padding_lines, Some(2));
        assert_eq!(flags.status_ttl, Some(12));
        assert_eq!(flags.log_file, Some(PathBuf::from("nyan.log")));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_bad_numbers() {
        let args = vec!["--padding-lines".to_string(), "lots".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.padding_lines, None);
    }

    #[test]
    fn test_flag_without_value_at_end_is_ignored() {
        let args = vec!["nyan".to_string(), "--status-ttl".to_string()];
        assert_eq!(parse_flag_tokens(&args), ConfigFlags::default());
    }

    #[test]
    fn test_config_union_prefers_other() {
        let file = ConfigFlags {
            min_editor_lines: Some(7),
            padding_lines: Some(3),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            padding_lines: Some(9),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.min_editor_lines, Some(7));
        assert_eq!(merged.padding_lines, Some(9));
    }

    #[test]
    fn test_chrome_applies_overrides() {
        let flags = ConfigFlags {
            min_editor_lines: Some(9),
            ..ConfigFlags::default()
        };
        let chrome = flags.chrome();
        assert_eq!(chrome.min_editor, 9);
        assert_eq!(chrome.padding, Chrome::default().padding);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            min_editor_lines: Some(6),
            padding_lines: Some(1),
            status_ttl: Some(20),
            log_file: Some(PathBuf::from("nyan.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_rejects_log_file_with_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        let flags = ConfigFlags {
            log_file: Some(PathBuf::from("my logs/nyan.log")),
            ..ConfigFlags::default()
        };

        let err = save_config_flags(&path, &flags).unwrap_err();
        assert!(err.to_string().contains("my logs/nyan.log"));
        assert!(!path.exists());
    }
}

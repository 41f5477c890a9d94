use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::template::{TagDetection, TemplateGuard, TemplateScope};

/// Defaults that can be saved in an rc file and overridden on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub dict: Option<PathBuf>,
    pub scope: Option<TemplateScope>,
    pub detect: Option<TagDetection>,
    pub limit: Option<usize>,
}

impl ConfigFlags {
    /// Merge two flag sets; values set in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            dict: other.dict.clone().or_else(|| self.dict.clone()),
            scope: other.scope.or(self.scope),
            detect: other.detect.or(self.detect),
            limit: other.limit.or(self.limit),
        }
    }

    /// Template guard described by these flags, defaults filled in.
    pub fn guard(&self) -> TemplateGuard {
        TemplateGuard::new(
            self.scope.unwrap_or_default(),
            self.detect.unwrap_or_default(),
        )
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("docquill").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("docquill")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("docquill").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("docquill")
                .join("config");
        }
    }

    PathBuf::from(".docquillrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".docquillrc")
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
        .flat_map(rc_line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Split one rc line into a flag and the rest of the line, so values may
/// contain spaces.
fn rc_line_tokens(line: &str) -> Vec<String> {
    match line.split_once(|c: char| c == '=' || c.is_whitespace()) {
        Some((flag, value)) => {
            let value = value.trim();
            if value.is_empty() {
                vec![flag.to_owned()]
            } else {
                vec![flag.to_owned(), value.to_owned()]
            }
        }
        None => vec![line.to_owned()],
    }
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# docquill defaults (saved with --save)".to_string());
    if let Some(dict) = &flags.dict {
        lines.push(format!("--dict {}", dict.display()));
    }
    if let Some(scope) = flags.scope {
        lines.push(format!("--scope {}", scope_name(scope)));
    }
    if let Some(detect) = flags.detect {
        lines.push(format!("--detect {}", detection_name(detect)));
    }
    if let Some(limit) = flags.limit {
        lines.push(format!("--limit {limit}"));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
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

/// Pick known flags out of a token list, ignoring everything else.
///
/// Accepts both `--flag value` and `--flag=value`. Unparseable values are
/// dropped rather than reported; clap validates the command line itself.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        if matches!(name, "--dict" | "--scope" | "--detect" | "--limit") {
            let value = match inline {
                Some(value) => Some(value),
                None => {
                    let next = tokens.get(i + 1).map(String::as_str);
                    if next.is_some() {
                        i += 1;
                    }
                    next
                }
            };
            if let Some(value) = value {
                match name {
                    "--dict" => flags.dict = Some(PathBuf::from(value)),
                    "--scope" => flags.scope = parse_scope(value),
                    "--detect" => flags.detect = parse_detection(value),
                    _ => flags.limit = value.parse().ok(),
                }
            }
        }
        i += 1;
    }
    flags
}

fn parse_scope(s: &str) -> Option<TemplateScope> {
    match s {
        "inside" => Some(TemplateScope::InsideTags),
        "outside" => Some(TemplateScope::OutsideTags),
        "anywhere" => Some(TemplateScope::Anywhere),
        _ => None,
    }
}

const fn scope_name(scope: TemplateScope) -> &'static str {
    match scope {
        TemplateScope::InsideTags => "inside",
        TemplateScope::OutsideTags => "outside",
        TemplateScope::Anywhere => "anywhere",
    }
}

fn parse_detection(s: &str) -> Option<TagDetection> {
    match s {
        "heuristic" => Some(TagDetection::Heuristic),
        "scan" => Some(TagDetection::Scan),
        _ => None,
    }
}

const fn detection_name(detect: TagDetection) -> &'static str {
    match detect {
        TagDetection::Heuristic => "heuristic",
        TagDetection::Scan => "scan",
    }
}

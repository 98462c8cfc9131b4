use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use routify::{render, scan_directory};

use crate::config::Config;
use crate::format;

const DEFAULT_OUTPUT: &str = "src/lib";
const DEFAULT_FILENAME: &str = "routes.ts";

/// Fully resolved options for one generator run.
pub struct GenerateOptions {
    pub output: PathBuf,
    pub filename: String,
    pub prettier_config: Option<PathBuf>,
    pub debug: bool,
}

impl GenerateOptions {
    /// Resolve options from CLI flags and config file values. Flags win over
    /// the config; built-in defaults apply when neither is given.
    pub fn resolve(
        output: Option<String>,
        filename: Option<String>,
        prettier_config: Option<String>,
        debug: bool,
        config: &Config,
    ) -> Self {
        Self {
            output: PathBuf::from(
                output
                    .or_else(|| config.generate.output.clone())
                    .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            ),
            filename: filename
                .or_else(|| config.generate.filename.clone())
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            prettier_config: prettier_config
                .or_else(|| config.generate.prettier_config.clone())
                .map(PathBuf::from),
            debug,
        }
    }
}

/// Run the generator: resolve the app directory, scan it, render the module,
/// format it, and write the output file. Returns the written path.
pub fn execute(options: &GenerateOptions) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    execute_in(&cwd, options)
}

pub fn execute_in(cwd: &Path, options: &GenerateOptions) -> Result<PathBuf> {
    let app_dir = find_app_dir(cwd)?;
    debug!(app_dir = %app_dir.display(), "resolved app directory");

    let tree = scan_directory(&app_dir, "")?;

    if options.debug {
        debug!(
            "route tree: {}",
            serde_json::to_string_pretty(&tree).context("Failed to serialize route tree")?
        );
    }

    let generated = render(&tree);
    let formatted = format::prettify(&generated, options.prettier_config.as_deref());

    let output_dir = cwd.join(&options.output);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let file_path = output_dir.join(&options.filename);
    fs::write(&file_path, formatted)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    Ok(file_path)
}

/// Resolve the app directory: `src/app` first, then `app`, relative to the
/// working directory. Neither existing is a fatal error.
fn find_app_dir(cwd: &Path) -> Result<PathBuf> {
    let src_app = cwd.join("src").join("app");
    if src_app.is_dir() {
        return Ok(src_app);
    }

    let app = cwd.join("app");
    if app.is_dir() {
        return Ok(app);
    }

    bail!(
        "\"app\" directory not found. Please ensure you have an app directory either in root or src/app."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn page(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("page.tsx"), "").unwrap();
    }

    fn default_options() -> GenerateOptions {
        GenerateOptions::resolve(None, None, None, false, &Config::default())
    }

    #[test]
    fn test_find_app_dir_prefers_src_app() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("src/app")).unwrap();
        fs::create_dir_all(root.path().join("app")).unwrap();

        let found = find_app_dir(root.path()).unwrap();
        assert_eq!(found, root.path().join("src/app"));
    }

    #[test]
    fn test_find_app_dir_falls_back_to_app() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("app")).unwrap();

        let found = find_app_dir(root.path()).unwrap();
        assert_eq!(found, root.path().join("app"));
    }

    #[test]
    fn test_find_app_dir_missing_is_fatal() {
        let root = TempDir::new().unwrap();
        assert!(find_app_dir(root.path()).is_err());
    }

    #[test]
    fn test_resolve_flag_overrides_config() {
        let config = Config::from_str(
            r#"
[generate]
output = "from-config"
filename = "config.ts"
"#,
        )
        .unwrap();

        let options = GenerateOptions::resolve(
            Some("from-flag".to_string()),
            None,
            None,
            false,
            &config,
        );

        assert_eq!(options.output, PathBuf::from("from-flag"));
        assert_eq!(options.filename, "config.ts");
    }

    #[test]
    fn test_resolve_defaults() {
        let options = default_options();
        assert_eq!(options.output, PathBuf::from("src/lib"));
        assert_eq!(options.filename, "routes.ts");
        assert!(options.prettier_config.is_none());
    }

    #[test]
    fn test_execute_writes_generated_module() {
        let root = TempDir::new().unwrap();
        page(&root.path().join("app/blog/[slug]"));

        let file_path = execute_in(root.path(), &default_options()).unwrap();

        assert_eq!(file_path, root.path().join("src/lib/routes.ts"));
        let written = fs::read_to_string(&file_path).unwrap();
        // Quote and spacing style may differ if a formatter ran; assert on
        // stable substrings only.
        assert!(written.contains("blogSlug"));
        assert!(written.contains("blog/[slug]"));
    }

    #[test]
    fn test_execute_creates_output_directories() {
        let root = TempDir::new().unwrap();
        page(&root.path().join("app/about"));

        let options = GenerateOptions::resolve(
            Some("deeply/nested/out".to_string()),
            Some("r.ts".to_string()),
            None,
            false,
            &Config::default(),
        );

        let file_path = execute_in(root.path(), &options).unwrap();
        assert_eq!(file_path, root.path().join("deeply/nested/out/r.ts"));
        assert!(file_path.is_file());
    }

    #[test]
    fn test_execute_without_app_dir_fails() {
        let root = TempDir::new().unwrap();
        assert!(execute_in(root.path(), &default_options()).is_err());
    }
}

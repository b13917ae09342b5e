//! Compile Markdown talks and print what the presentation layer will get.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use slidedeck_config::Config;
use slidedeck_engine::{Deck, HtmlRenderer, io};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Starter deck written by `slidedeck new`.
const TEMPLATE: &str = include_str!("template.md");

/// Write talks as Markdown, compile them into slide decks.
#[derive(Parser, Debug)]
#[command(name = "slidedeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a talk and print its outline
    Compile {
        file: PathBuf,

        /// Print the compiled deck as JSON instead of an outline
        #[arg(short, long)]
        json: bool,
    },

    /// List talks in the configured talks directory (the default)
    List,

    /// Create a new talk from the starter template
    New { file: PathBuf },

    /// Write the config file
    Init {
        /// Directory holding your talks
        #[arg(long)]
        talks: PathBuf,

        /// Fence language rendered as a diagram
        #[arg(long)]
        diagram_language: Option<String>,

        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match cli.command.unwrap_or(Command::List) {
        Command::Compile { file, json } => {
            let config = Config::load().context("Failed to load config file")?;
            compile_file(&file, config.as_ref(), json)
        }
        Command::List => {
            let config = Config::load().context("Failed to load config file")?;
            list_talks(config.as_ref())
        }
        Command::New { file } => {
            create_talk(&file)?;
            println!("Created: {}", file.display());
            println!("\nCompile it with:\n  slidedeck compile {}", file.display());
            Ok(())
        }
        Command::Init {
            talks,
            diagram_language,
            force,
        } => {
            let path = Config::config_path();
            let config = init_config(&path, talks, diagram_language, force)?;
            println!(
                "Wrote {} (talks in {})",
                path.display(),
                config.talks_path.display()
            );
            Ok(())
        }
    }
}

fn compile_file(file: &Path, config: Option<&Config>, json: bool) -> Result<()> {
    let mut renderer = HtmlRenderer::new();
    if let Some(config) = config {
        renderer = renderer.with_diagram_language(config.diagram_language.clone());
    }

    let deck = io::read_deck_with(file, &renderer)
        .with_context(|| format!("Failed to compile {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&deck)?);
    } else {
        print!("{}", render_outline(&deck));
    }
    Ok(())
}

fn list_talks(config: Option<&Config>) -> Result<()> {
    let Some(config) = config else {
        bail!(
            "No config file at {}. Run `slidedeck init --talks <dir>` first.",
            Config::config_path().display()
        );
    };

    let talks = io::scan_decks(&config.talks_path)
        .with_context(|| format!("Failed to list talks in {}", config.talks_path.display()))?;
    log::debug!("found {} talks", talks.len());

    for talk in talks {
        println!("{}", talk.display());
    }
    Ok(())
}

/// Write the starter template to `file`, refusing to replace an existing file.
fn create_talk(file: &Path) -> Result<()> {
    let mut out = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file)
    {
        Ok(out) => out,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("File already exists: {}", file.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", file.display()));
        }
    };
    out.write_all(TEMPLATE.as_bytes())
        .with_context(|| format!("Failed to write {}", file.display()))?;
    log::debug!("wrote starter talk to {}", file.display());
    Ok(())
}

fn init_config(
    path: &Path,
    talks: PathBuf,
    diagram_language: Option<String>,
    force: bool,
) -> Result<Config> {
    if !force && path.exists() {
        bail!(
            "Config file already exists at {}. Pass --force to replace it.",
            path.display()
        );
    }

    let mut config = Config::new(talks);
    if let Some(language) = diagram_language {
        config = config.with_diagram_language(language);
    }
    config.save_to_path(path)?;
    Ok(config)
}

fn render_outline(deck: &Deck) -> String {
    let mut out = format!(
        "{} ({} slides, {} steps, theme {})\n",
        deck.title(),
        deck.len(),
        deck.total_steps(),
        deck.meta.theme
    );
    for slide in &deck.slides {
        let notes = if slide.has_notes() { "  [notes]" } else { "" };
        out.push_str(&format!(
            "{:>3}  {:<8} {} step{}{}\n",
            slide.index + 1,
            slide.layout(),
            slide.total_steps,
            if slide.total_steps == 1 { "" } else { "s" },
            notes
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn outline_lists_each_slide() {
        let deck = slidedeck_engine::compile(
            "---\ntitle: Demo\n---\n# Hi\n---\n- a\n<!-- pause -->\n- b\n<!-- remember -->",
        );

        let outline = render_outline(&deck);

        assert_eq!(
            outline,
            "Demo (2 slides, 3 steps, theme default)\n  1  cover    1 step\n  2  default  2 steps  [notes]\n"
        );
    }

    #[test]
    fn new_talk_is_a_working_deck() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("talk.md");

        create_talk(&file).unwrap();
        let deck = io::read_deck(&file).unwrap();

        assert_eq!(deck.title(), "My Presentation");
        assert_eq!(deck.meta.theme, "default");
        let layouts: Vec<&str> = deck.slides.iter().map(|s| s.layout()).collect();
        assert_eq!(layouts, vec!["cover", "center", "center", "center", "cover"]);
        assert_eq!(
            deck.slides[1].notes.as_deref(),
            Some("Introduce yourself before the agenda")
        );
        assert!(deck.slides[2].rendered_full.contains("language-rust"));
        assert!(deck.slides[4].flag("confetti"));
    }

    #[test]
    fn new_talk_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("talk.md");
        std::fs::write(&file, "# Mine").unwrap();

        let err = create_talk(&file).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "# Mine");
    }

    #[test]
    fn init_writes_a_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slidedeck").join("config.toml");

        let written = init_config(&path, dir.path().join("talks"), Some("dot".into()), false)
            .unwrap();

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, written);
        assert_eq!(loaded.diagram_language, "dot");
        assert_eq!(loaded.talks_path, dir.path().join("talks"));
    }

    #[test]
    fn init_keeps_existing_config_unless_forced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        init_config(&path, PathBuf::from("/first"), None, false).unwrap();

        assert!(init_config(&path, PathBuf::from("/second"), None, false).is_err());
        let kept = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(kept.talks_path, PathBuf::from("/first"));

        init_config(&path, PathBuf::from("/second"), None, true).unwrap();
        let replaced = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(replaced.talks_path, PathBuf::from("/second"));
        assert_eq!(replaced.diagram_language, "mermaid");
    }

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["slidedeck"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["slidedeck", "compile", "talk.md", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Command::Compile { json: true, .. })));
    }
}

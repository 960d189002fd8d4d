//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::meta::{Field, RawMeta};
use crate::share::DEFAULT_BASE;

/// Generate SEO head tags, robots.txt and sitemap.xml from page metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the <head> snippet (meta, Open Graph, Twitter Card, JSON-LD)
    #[command(visible_alias = "h")]
    Head {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print robots.txt
    #[command(visible_alias = "r")]
    Robots {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print sitemap.xml
    #[command(visible_alias = "m")]
    Sitemap {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a standalone HTML page using the head snippet
    #[command(visible_alias = "x")]
    Html {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write all artifacts into a directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory
        #[arg(short, long, default_value = "seo", value_hint = clap::ValueHint::DirPath)]
        out: PathBuf,
    },

    /// Print a share link that restores the current metadata
    #[command(visible_alias = "s")]
    Share {
        #[command(flatten)]
        input: InputArgs,

        /// Page URL the config fragment is attached to
        #[arg(long, default_value = DEFAULT_BASE, value_hint = clap::ValueHint::Url)]
        base: String,

        /// Print only the token, without base URL and `config=` prefix
        #[arg(short, long)]
        token_only: bool,
    },

    /// Decode a share link (or token) and print the metadata as JSON
    #[command(visible_alias = "l")]
    Load {
        /// Share link, `#config=...` fragment, or bare token
        link: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Where metadata comes from. Later sources override earlier ones:
/// example, config file, share link, individual flags.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Metadata file (TOML)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Start from built-in example metadata
    #[arg(short, long)]
    pub example: bool,

    /// Share link, `#config=...` fragment, or bare token to start from
    #[arg(short, long, value_name = "LINK")]
    pub from: Option<String>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Page description
    #[arg(long)]
    pub description: Option<String>,

    /// Canonical URL (absolute)
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub canonical: Option<String>,

    /// Site name
    #[arg(long)]
    pub site_name: Option<String>,

    /// Social preview image URL (absolute)
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub og_image: Option<String>,

    /// Twitter handle, with or without `@`
    #[arg(long)]
    pub twitter: Option<String>,

    /// Theme color (any CSS color)
    #[arg(long)]
    pub theme_color: Option<String>,

    /// Language tag (default: en)
    #[arg(long)]
    pub lang: Option<String>,
}

impl InputArgs {
    /// Individual field flags as a raw layer.
    pub fn flags(&self) -> RawMeta {
        let flags = [
            (Field::Title, &self.title),
            (Field::Description, &self.description),
            (Field::Canonical, &self.canonical),
            (Field::SiteName, &self.site_name),
            (Field::OgImage, &self.og_image),
            (Field::Twitter, &self.twitter),
            (Field::ThemeColor, &self.theme_color),
            (Field::Lang, &self.lang),
        ];

        let mut raw = RawMeta::default();
        for (field, value) in flags {
            if let Some(value) = value {
                raw.set(field, value.as_str());
            }
        }
        raw
    }
}

/// Output destination for single-artifact commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

use anyhow::Result;
use clap::Parser;
use ghrd::PageQuery;
use ghrd::commands::{self, config::Config};
use std::path::PathBuf;

/// ghrd - GitHub Release Downloader
///
/// List the releases of a public GitHub repository and download one of them as a
/// source tarball, extracted into a local directory.
///
/// Examples:
///   ghrd list owner/repo                    # Show the releases of owner/repo
///   ghrd download owner/repo -o downloads   # Extract the latest release into downloads/
#[derive(Parser, Debug)]
#[command(author, version = env!("GHRD_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com; also via GHRD_API_URL)
    #[arg(long = "api-url", env = "GHRD_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the releases of a repository
    List(ListArgs),

    /// Download and extract the source tarball of a release
    Download(DownloadArgs),
}

#[derive(clap::Args, Debug)]
pub struct PageArgs {
    /// Number of releases per page (the API may cap it)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: Option<u32>,

    /// Page of results to fetch
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,
}

impl From<PageArgs> for PageQuery {
    fn from(args: PageArgs) -> Self {
        PageQuery::new(args.per_page, args.page)
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,

    #[command(flatten)]
    pub pages: PageArgs,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,

    /// Release tag to download; "latest" is the first release the API returns
    #[arg(long, short = 't', default_value = ghrd::LATEST)]
    pub tag: String,

    /// Directory to extract the release into
    #[arg(long = "out", short = 'o', value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub pages: PageArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.api_url)?;

    match cli.command {
        Commands::List(args) => commands::list(config, &args.repo, args.pages.into())?,
        Commands::Download(args) => commands::download(
            config,
            &args.repo,
            &args.tag,
            &args.out_dir,
            args.pages.into(),
        )?,
    }
    Ok(())
}

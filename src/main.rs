#![forbid(unsafe_code)]
//! fsl-maintenance command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fsl::commands::{
    execute_comps, execute_full, execute_live, execute_menus, execute_playbook, execute_raw,
    execute_short, CompsOptions, FullOptions, LiveOptions, MenusOptions, PlaybookOptions,
    RawOptions, ShortOptions,
};
use fsl::generate::menus::MENU_DIR;
use fsl::generate::playbook::PLAYBOOK_PATH;
use fsl::publish::GitPublisher;
use fsl::store::DEFAULT_FILENAME;

#[derive(Parser)]
#[command(name = "fsl-maintenance")]
#[command(about = "Maintain the Fedora Security Lab package list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the details about the packages
    Display {
        #[command(subcommand)]
        cmd: DisplayCommands,
    },

    /// Create various output from the package list
    Output {
        #[command(subcommand)]
        cmd: OutputCommands,
    },
}

#[derive(Subcommand)]
enum DisplayCommands {
    /// All included tools and details will be printed to stdout
    Full,

    /// The pkglist.yaml file will be printed to stdout
    Raw,

    /// Only show the absolute minimum about the package list
    Short,
}

#[derive(Subcommand)]
enum OutputCommands {
    /// Generate the entries to include into the comps-fXX.xml.in file
    Comps,

    /// Generate an Ansible playbook for the installation and push it
    Playbook,

    /// Generate the exclude list for the kickstart file
    Live,

    /// Generate the .desktop files which are used for the menu structure
    Menus,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let pkglist = PathBuf::from(DEFAULT_FILENAME);

    match cli.command {
        Commands::Display { cmd } => match cmd {
            DisplayCommands::Full => execute_full(FullOptions { pkglist })?,
            DisplayCommands::Raw => execute_raw(RawOptions { pkglist })?,
            DisplayCommands::Short => execute_short(ShortOptions { pkglist })?,
        },

        Commands::Output { cmd } => match cmd {
            OutputCommands::Comps => execute_comps(CompsOptions { pkglist })?,
            OutputCommands::Playbook => {
                // The repository handle only exists for this command; every
                // other command runs fine outside a checkout.
                let mut publisher = GitPublisher::open(&std::env::current_dir()?)?;
                let options = PlaybookOptions {
                    pkglist,
                    output: PathBuf::from(PLAYBOOK_PATH),
                };
                execute_playbook(options, &mut publisher)?;
            }
            OutputCommands::Live => execute_live(LiveOptions { pkglist })?,
            OutputCommands::Menus => {
                let options = MenusOptions {
                    pkglist,
                    menu_dir: PathBuf::from(MENU_DIR),
                };
                execute_menus(options)?;
            }
        },
    }

    Ok(())
}

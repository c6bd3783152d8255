use clap::Parser;
use dpr::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Wizard(args) => dpr::cli::commands::wizard::run(args, &global),
        Commands::Validate(args) => dpr::cli::commands::validate::run(args, &global),
        Commands::Review(args) => dpr::cli::commands::review::run(args, &global),
        Commands::Export(args) => dpr::cli::commands::export::run(args, &global),
        Commands::Schema(cmd) => dpr::cli::commands::schema::run(cmd),
        Commands::Completions(args) => dpr::cli::commands::completions::run(args),
    }
}

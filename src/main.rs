use anyhow::Result;
use clap::Parser;

use obj_viewer::cli::{Cli, Command};
use obj_viewer::{server, viewer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Serve { port }) => {
            let port = server::resolve_port(port);
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            if let Err(e) = runtime.block_on(server::serve(cli.assets, port)) {
                log::error!("{e:#}");
                return Err(e);
            }
            Ok(())
        }
        None => viewer::run(cli.assets),
    }
}

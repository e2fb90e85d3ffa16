use log::info;
use std::{net::SocketAddr, process};
use textcodec::{create_server, Configuration, Logger};
use tokio::runtime::Runtime;

fn run() -> Result<(), String> {
    let configuration = Configuration::new()?;
    Logger::init(configuration.log_level()).map_err(|error| error.to_string())?;

    let server = create_server(&configuration).map_err(|error| error.to_string())?;
    let address = SocketAddr::new(configuration.host(), configuration.port());
    let runtime = Runtime::new().map_err(|error| format!("Could not start runtime: {}", error))?;
    info!(
        "max body size {} bytes ({} for positional codecs)",
        configuration.max_body_size(),
        configuration.max_positional_size()
    );
    runtime.block_on(server.run(address)).map_err(|error| error.to_string())
}

fn main() {
    if let Err(message) = run() {
        eprintln!("{}", message);
        process::exit(1);
    }
}

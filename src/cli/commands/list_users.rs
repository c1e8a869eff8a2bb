use crate::cli::OutputFormat;
use crate::cli::output::output_users;
use bdbctl::core::client::ApiClient;
use bdbctl::core::provision;

pub fn run(client: &ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Human {
        println!("Fetching list of users...");
    }

    let users = provision::list_users(client)?;
    output_users(&users, format, &mut std::io::stdout())
}

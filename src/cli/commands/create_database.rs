use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::display::success;
use crate::cli::output::output_json;
use bdbctl::core::client::ApiClient;
use bdbctl::core::provision;

pub fn run(client: &ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Human {
        println!("Creating a new database...");
    }

    let id = provision::create_database(client)?;

    match format {
        OutputFormat::Json => output_json(&json!({ "id": id }), &mut std::io::stdout())?,
        OutputFormat::Human => println!("{}", success(&format!("Database created with ID: {id}"))),
    }

    Ok(())
}

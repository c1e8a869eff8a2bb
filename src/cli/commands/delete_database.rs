use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::display::success;
use crate::cli::output::output_json;
use bdbctl::core::client::ApiClient;
use bdbctl::core::provision;

pub fn run(client: &ApiClient, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Human {
        println!("Deleting database with ID: {id}");
    }

    provision::delete_database(client, id)?;

    match format {
        OutputFormat::Json => output_json(&json!({ "deleted": id }), &mut std::io::stdout())?,
        OutputFormat::Human => println!("{}", success("Database deleted successfully!")),
    }

    Ok(())
}

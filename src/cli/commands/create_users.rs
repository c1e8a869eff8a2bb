use anyhow::Context;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::display::success;
use crate::cli::output::output_json;
use bdbctl::core::client::ApiClient;
use bdbctl::core::models::seed_users;
use bdbctl::core::provision;

pub fn run(client: &ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    let users = seed_users(client.api_version());
    let mut created = Vec::with_capacity(users.len());

    if format == OutputFormat::Human {
        println!("Creating users...");
    }

    provision::create_users(client, &users, |user| {
        if format == OutputFormat::Human {
            println!("{}", success(&format!("User {} created successfully!", user.name)));
        }
        created.push(user.email.clone());
    })
    .with_context(|| {
        format!(
            "user creation stopped after {} of {} users",
            created.len(),
            users.len()
        )
    })?;

    if format == OutputFormat::Json {
        output_json(&json!({ "created": created }), &mut std::io::stdout())?;
    }

    Ok(())
}

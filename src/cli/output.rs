use std::io::Write;

use bdbctl::core::models::User;
use crate::cli::OutputFormat;

/// Write users in the requested output format.
pub fn output_users(
    users: &[User],
    format: OutputFormat,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, users)?;
            writeln!(writer)?;
        }
        OutputFormat::Human => {
            writeln!(writer, "Users in the system:")?;
            for user in users {
                writeln!(writer, "{}", super::display::render_user_line(user))?;
            }
        }
    }
    Ok(())
}

/// Write a single JSON document followed by a newline.
pub fn output_json(value: &serde_json::Value, writer: &mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

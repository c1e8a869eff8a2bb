use std::io::IsTerminal;

use owo_colors::OwoColorize;

use bdbctl::core::models::User;

/// Render one user as a list line.
pub fn render_user_line(user: &User) -> String {
    format!(
        "- Name: {} | Role: {} | Email: {}",
        user.name, user.role, user.email
    )
}

/// Green when stdout is a terminal, plain otherwise.
pub fn success(message: &str) -> String {
    if std::io::stdout().is_terminal() {
        message.green().to_string()
    } else {
        message.to_string()
    }
}

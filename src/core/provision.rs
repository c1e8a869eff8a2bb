use tracing::info;

use super::client::ApiClient;
use super::models::{DatabaseId, DatabaseSpec, NewUser, User};
use super::transport::Transport;
use crate::error::{BdbctlError, Result};

/// Create the fixed database and return the identifier the server assigned.
pub fn create_database<T: Transport>(client: &ApiClient<T>) -> Result<DatabaseId> {
    let version = client.api_version();
    let spec = DatabaseSpec::default_for(version);
    let response = client.post(version.databases_path(), &spec)?;

    let field = version.id_field();
    let id = response
        .get(field)
        .and_then(DatabaseId::from_value)
        .ok_or(BdbctlError::MissingField(field))?;

    info!(%id, "database created");
    Ok(id)
}

/// Create `users` one request at a time, in order.
///
/// `on_created` runs after each success. The first failure stops the loop
/// and is returned; users created before it are left in place.
pub fn create_users<T, F>(client: &ApiClient<T>, users: &[NewUser], mut on_created: F) -> Result<()>
where
    T: Transport,
    F: FnMut(&NewUser),
{
    let path = client.api_version().users_path();
    for user in users {
        client.post(path, user)?;
        info!(email = %user.email, "user created");
        on_created(user);
    }
    Ok(())
}

/// Fetch all users in the order the server returns them.
pub fn list_users<T: Transport>(client: &ApiClient<T>) -> Result<Vec<User>> {
    let response = client.get(client.api_version().users_path())?;
    Ok(serde_json::from_value(response)?)
}

pub fn delete_database<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<()> {
    let path = format!("{}/{}", client.api_version().databases_path(), id);
    client.delete(&path)?;
    info!(id, "database deleted");
    Ok(())
}

//! Server action: connect to the credential store and serve the API.

use crate::{
    api,
    auth::{
        password::BcryptHasher,
        postgres::{PgCredentialStore, PgTokenIssuer},
        AuthService,
    },
    cli::actions::Action,
};
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tracing::info;
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            let parsed = Url::parse(&dsn).context("Invalid DSN")?;

            // Log the target without echoing credentials
            info!(
                "Connecting to {}{}",
                parsed.host_str().unwrap_or("localhost"),
                parsed.path()
            );

            let pool = PgPoolOptions::new()
                .min_connections(1)
                .max_connections(5)
                .max_lifetime(Duration::from_secs(60 * 2))
                .test_before_acquire(true)
                .connect(&dsn)
                .await
                .context("Failed to connect to database")?;

            let auth = Arc::new(AuthService::new(
                Arc::new(PgCredentialStore::new(pool.clone())),
                Arc::new(BcryptHasher::default()),
                Arc::new(PgTokenIssuer::new(pool)),
            ));

            api::new(port, auth).await
        }
    }
}

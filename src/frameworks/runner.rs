use std::sync::Arc;

use crate::domain::SessionOutcome;
use crate::frameworks::config;
use crate::frameworks::logging::init_tracing;
use crate::interface_adapters::clients::carpool::CarpoolClient;
use crate::interface_adapters::clients::graph::GraphClient;
use crate::interface_adapters::clients::oauth::PresetOAuthLogin;
use crate::use_cases::contact_info::ContactInfoStrategy;
use crate::use_cases::presentation::{SignInPresentation, present};
use crate::use_cases::sign_in::{SignInStrategy, StrategyResolver};

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing("carpool_auth=info,warn");

    let timeout = config::http_timeout();
    let api_url = config::carpool_api_url();
    tracing::debug!(api_url = %api_url, ?timeout, "carpool client configured.");
    let api = match CarpoolClient::new(api_url, timeout) {
        Ok(client) => Arc::new(client),
        Err(error) => {
            tracing::error!(%error, "failed to build carpool client");
            return;
        }
    };

    let graph_url = match config::graph_api_url() {
        Ok(url) => url,
        Err(error) => {
            tracing::error!(%error, "invalid graph api url");
            return;
        }
    };
    let graph = match GraphClient::new(graph_url, timeout) {
        Ok(client) => Arc::new(client),
        Err(error) => {
            tracing::error!(%error, "failed to build graph client");
            return;
        }
    };

    let method = match config::sign_in_method() {
        Ok(method) => method,
        Err(error) => {
            tracing::error!(%error, "invalid sign-in configuration");
            return;
        }
    };

    let resolver = StrategyResolver {
        api,
        oauth: Arc::new(PresetOAuthLogin::new(config::facebook_access_token())),
        graph,
    };
    let strategy = resolver.resolve(method);

    let result = strategy.sign_in().await;
    match present(&result) {
        SignInPresentation::Silent => {
            tracing::info!("sign-in cancelled.");
            return;
        }
        SignInPresentation::Alert { title, message } => {
            tracing::warn!(%title, %message, "sign-in failed.");
            return;
        }
        SignInPresentation::ProfileSetup { .. } => {
            tracing::info!("signed in; profile setup required.");
        }
        SignInPresentation::Home { .. } => {
            tracing::info!("signed in.");
        }
    }

    let Ok(SessionOutcome::SignedIn(session)) = result else {
        return;
    };
    match strategy
        .contact_info_strategy(&session)
        .get_contact_info()
        .await
    {
        Ok(info) => tracing::info!(
            name = ?info.name,
            email = ?info.email,
            phone = ?info.phone,
            avatar_url = ?info.avatar_url,
            "contact info resolved."
        ),
        Err(error) => tracing::error!(%error, "failed to fetch contact info"),
    }
}

use crate::gateway::error::GatewayError;
use crate::gateway::error::GatewayError::CantCreateClient;
use crate::tools::log_message_and_return;
use reqwest::Client;

pub fn build_client() -> Result<Client, GatewayError> {
    reqwest::ClientBuilder::new()
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}

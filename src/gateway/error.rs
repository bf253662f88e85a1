use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GatewayError {
    #[error("Can't build HTTP client.")]
    CantCreateClient,
    #[error("The document store can't be reached.")]
    ConnectionFailed,
    #[error("The document store rejected the query [status: {0}]")]
    QueryRejected(u16),
    #[error("The document store response is malformed.")]
    MalformedResponse,
}

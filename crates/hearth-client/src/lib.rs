pub mod auth_client;
pub mod credentials;
pub mod http;
pub mod listing_client;
pub mod paths;
pub mod settings;

pub use auth_client::AuthClient;
pub use credentials::CredentialStore;
pub use http::build_http_client;
pub use listing_client::PropertiesClient;
pub use paths::HearthPaths;

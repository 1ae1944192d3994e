/// Network adapters for the quality server web API
mod sonar_client;

pub use sonar_client::{basic_auth_header, SonarHttpClient};

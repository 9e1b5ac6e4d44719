mod mock_provider_server;

pub use mock_provider_server::*;

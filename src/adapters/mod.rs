pub mod completion_client_http;
pub mod template;

pub use completion_client_http::HttpCompletionClient;
pub use template::MinijinjaTemplateRenderer;

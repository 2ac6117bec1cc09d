pub mod http;
pub mod transport;

pub use self::http::HttpClient;
pub use transport::Transport;

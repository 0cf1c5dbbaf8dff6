pub mod clock;
pub mod http_client;

pub use clock::SystemClock;
pub use http_client::ApiAdapter;

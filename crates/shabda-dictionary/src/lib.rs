mod client;
mod schema;

pub use client::FreeDictionaryClient;
pub use schema::parse_response;

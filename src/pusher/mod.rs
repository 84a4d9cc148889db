pub mod auth;
pub mod builder;
pub mod client;

pub use auth::socket_signature;
pub use builder::PusherBuilder;
pub use client::Pusher;

pub mod core;
pub mod pusher;

pub use self::core::{
    config::PusherConfig,
    errors::{PusherError, RequestError, RequestErrorKind},
    types::*,
};
pub use pusher::{Pusher, PusherBuilder};

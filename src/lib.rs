pub mod base58;
pub mod base58_check;
pub mod base62;
pub mod base64;
pub mod base_binary;
pub mod base_common;
pub mod base_positional;
pub mod builder;
pub mod chronometer;
pub mod codec;
pub mod configuration;
pub mod create_server;
pub mod error;
pub mod hex;
pub mod logger;
pub mod morse;
pub mod pipe;
pub mod server;
pub mod transform;
pub mod unicode;

pub use self::{
    builder::{Decoder, Encoder},
    chronometer::Chronometer,
    codec::Codec,
    configuration::Configuration,
    create_server::create_server,
    error::Error,
    logger::Logger,
    server::Server,
};

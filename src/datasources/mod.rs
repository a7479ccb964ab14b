pub mod relay;

pub use relay::{BotRelayClient, ChatRelay};

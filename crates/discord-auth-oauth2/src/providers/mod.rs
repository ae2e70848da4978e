// Provider implementations built on the static descriptors.

pub mod discord;
pub use discord::DiscordProvider;

pub mod settings;

pub use settings::{Settings, SubscriberSettings, ENV_PREFIX};

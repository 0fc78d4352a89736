pub mod error;
pub mod features;
pub mod record;
pub mod token;

pub use error::{Result, TokenError};
pub use features::{EnrichedToken, Features};
pub use record::{TokenRecord, UniqueValues};
pub use token::Token;

pub use tessera_protocol::FeatureAxes;

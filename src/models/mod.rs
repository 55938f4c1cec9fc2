mod intent;
mod message;
mod turn;

pub use intent::IntentResult;
pub use message::{MessageRequest, UpstreamPayload};
pub use turn::{Speaker, Turn};

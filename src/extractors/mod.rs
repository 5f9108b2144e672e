pub mod id;
pub mod json;

pub use id::{parse_id, IdEnvelope, IdParam, IdQuery};
pub use json::{BodyBytes, JsonBody};

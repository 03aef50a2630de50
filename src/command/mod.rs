//! Command translation engine
//!
//! Turns a loosely typed request into an exact external command line using
//! the schema registry, then appends it through a [`ChannelWriter`].
//!
//! [`ChannelWriter`]: crate::channel::ChannelWriter

pub mod gateway;
pub mod normalize;
pub mod request;
pub mod serialize;

pub use gateway::CommandGateway;
pub use normalize::{normalize, FieldValue, NormalizedCommand, FIELD_SEPARATOR};
pub use request::RawRequest;
pub use serialize::{Clock, CommandSerializer, FixedClock, SerializedLine, SystemClock};

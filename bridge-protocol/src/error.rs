use thiserror::Error;

/// Everything that can go wrong at the viewer boundary.
///
/// Only `DuplicateRoom` is allowed to abort anything, and only during scene
/// setup. The rest degrade to a logged warning on the receiving side; neither
/// loop ever stops over a bad message.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Bad wire framing or a payload that does not parse.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// A well-formed message whose kind no handler claims.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A navigate/highlight target that is not in the room catalog.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// A second registration under an already-taken room id.
    #[error("room id already registered: {0}")]
    DuplicateRoom(String),
}

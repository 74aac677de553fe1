mod protocol;
mod sync;

pub use protocol::{
    PROTOCOL_MAGIC, PROTOCOL_VERSION, PeerFrame, PeerState, ProtocolError, SignalMessage, Slot,
};
pub use sync::{InboundFrame, NetworkSync, OpponentTransform, RemoteInbox, SyncNotice};

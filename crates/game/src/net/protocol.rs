use glam::Vec3;
use rkyv::{Archive, rancor};
use serde::{Deserialize, Serialize};

pub const PROTOCOL_MAGIC: u32 = 0x4152_4E41;
pub const PROTOCOL_VERSION: u32 = 1;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Archive,
    rkyv::Serialize,
    rkyv::Deserialize,
)]
#[rkyv(compare(PartialEq), derive(Debug))]
pub enum Slot {
    P1,
    P2,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Archive, rkyv::Serialize, rkyv::Deserialize,
)]
#[rkyv(derive(Debug))]
pub struct PeerState {
    pub slot: Slot,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rot: f32,
}

impl PeerState {
    pub fn new(slot: Slot, position: Vec3, rot: f32) -> Self {
        Self {
            slot,
            x: position.x,
            y: position.y,
            z: position.z,
            rot,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.position().is_finite() && self.rot.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalMessage {
    RoomCreated {
        #[serde(rename = "roomId")]
        room_id: String,
        slot: Slot,
        players: u32,
    },
    JoinedRoom {
        #[serde(rename = "roomId")]
        room_id: String,
        slot: Slot,
        players: u32,
    },
    PlayerJoined {
        players: u32,
    },
    MatchStarted,
    OpponentLeft,
    State(PeerState),
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed signal frame: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary frame encoding failed: {0}")]
    Encode(rancor::Error),
    #[error("binary frame decoding failed: {0}")]
    Decode(rancor::Error),
    #[error("frame header mismatch (magic {magic:#x}, version {version})")]
    BadHeader { magic: u32, version: u32 },
    #[error("non-finite transform from {0:?}")]
    NonFinite(Slot),
}

impl SignalMessage {
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        let message: Self = serde_json::from_str(text)?;
        if let Self::State(state) = &message {
            if !state.is_finite() {
                return Err(ProtocolError::NonFinite(state.slot));
            }
        }
        Ok(message)
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Binary envelope for [`PeerState`] on transports that carry raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Archive, rkyv::Serialize, rkyv::Deserialize)]
#[rkyv(derive(Debug))]
pub struct PeerFrame {
    pub magic: u32,
    pub version: u32,
    pub tick: u64,
    pub state: PeerState,
}

impl PeerFrame {
    pub fn new(tick: u64, state: PeerState) -> Self {
        Self {
            magic: PROTOCOL_MAGIC,
            version: PROTOCOL_VERSION,
            tick,
            state,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.magic == PROTOCOL_MAGIC && self.version == PROTOCOL_VERSION
    }

    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        rkyv::to_bytes::<rancor::Error>(self)
            .map(|aligned| aligned.into_vec())
            .map_err(ProtocolError::Encode)
    }

    pub fn decode(data: &[u8]) -> Result<Self, ProtocolError> {
        let mut aligned = rkyv::util::AlignedVec::<16>::with_capacity(data.len());
        aligned.extend_from_slice(data);
        let frame = rkyv::from_bytes::<Self, rancor::Error>(&aligned).map_err(ProtocolError::Decode)?;

        if !frame.is_valid() {
            return Err(ProtocolError::BadHeader {
                magic: frame.magic,
                version: frame.version,
            });
        }
        if !frame.state.is_finite() {
            return Err(ProtocolError::NonFinite(frame.state.slot));
        }
        Ok(frame)
    }
}

use std::sync::mpsc::{self, Receiver, Sender};

use glam::Vec3;

use super::{PeerFrame, PeerState, ProtocolError, SignalMessage, Slot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentTransform {
    pub slot: Slot,
    pub position: Vec3,
    pub rotation: f32,
    pub received_frame: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InboundFrame {
    Text(String),
    Binary(Vec<u8>),
    Closed,
}

/// Handle given to the transport. Delivery never touches simulation state,
/// so it can live on another thread.
#[derive(Debug, Clone)]
pub struct RemoteInbox {
    sender: Sender<InboundFrame>,
}

impl RemoteInbox {
    pub fn deliver(&self, frame: InboundFrame) -> bool {
        self.sender.send(frame).is_ok()
    }

    pub fn deliver_text(&self, text: impl Into<String>) -> bool {
        self.deliver(InboundFrame::Text(text.into()))
    }

    pub fn deliver_binary(&self, bytes: Vec<u8>) -> bool {
        self.deliver(InboundFrame::Binary(bytes))
    }

    pub fn close(&self) -> bool {
        self.deliver(InboundFrame::Closed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncNotice {
    RoomJoined(Slot),
    OpponentJoined,
    MatchStarted,
    ConnectionLost,
}

pub struct NetworkSync {
    slot: Option<Slot>,
    room_id: Option<String>,
    players: u32,
    connected: bool,
    opponent: Option<OpponentTransform>,
    inbox: Receiver<InboundFrame>,
    inbox_sender: Sender<InboundFrame>,
    outbox: Vec<SignalMessage>,
    dropped_frames: u64,
}

impl Default for NetworkSync {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkSync {
    pub fn new() -> Self {
        let (inbox_sender, inbox) = mpsc::channel();
        Self {
            slot: None,
            room_id: None,
            players: 0,
            connected: false,
            opponent: None,
            inbox,
            inbox_sender,
            outbox: Vec::new(),
            dropped_frames: 0,
        }
    }

    pub fn inbox(&self) -> RemoteInbox {
        RemoteInbox {
            sender: self.inbox_sender.clone(),
        }
    }

    pub fn slot(&self) -> Option<Slot> {
        self.slot
    }

    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    pub fn players(&self) -> u32 {
        self.players
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn opponent(&self) -> Option<&OpponentTransform> {
        self.opponent.as_ref()
    }

    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }

    pub fn poll(&mut self, frame: u64) -> Vec<SyncNotice> {
        let mut notices = Vec::new();
        while let Ok(inbound) = self.inbox.try_recv() {
            let result = match inbound {
                InboundFrame::Text(text) => SignalMessage::from_json(&text)
                    .map(|message| self.apply(message, frame)),
                InboundFrame::Binary(bytes) => {
                    PeerFrame::decode(&bytes).map(|peer| self.apply_state(peer.state, frame))
                }
                InboundFrame::Closed => Ok(self.lose_connection()),
            };

            match result {
                Ok(Some(notice)) => notices.push(notice),
                Ok(None) => {}
                Err(err) => self.drop_frame(&err),
            }
        }
        notices
    }

    pub fn apply(&mut self, message: SignalMessage, frame: u64) -> Option<SyncNotice> {
        match message {
            SignalMessage::RoomCreated {
                room_id,
                slot,
                players,
            }
            | SignalMessage::JoinedRoom {
                room_id,
                slot,
                players,
            } => {
                log::info!("Joined room {} as {:?} ({} players)", room_id, slot, players);
                self.room_id = Some(room_id);
                self.slot = Some(slot);
                self.players = players;
                self.connected = true;
                Some(SyncNotice::RoomJoined(slot))
            }
            SignalMessage::PlayerJoined { players } => {
                self.players = players;
                Some(SyncNotice::OpponentJoined)
            }
            SignalMessage::MatchStarted => Some(SyncNotice::MatchStarted),
            SignalMessage::OpponentLeft => {
                log::info!("Opponent left the room");
                self.lose_connection()
            }
            SignalMessage::State(state) => self.apply_state(state, frame),
        }
    }

    fn apply_state(&mut self, state: PeerState, frame: u64) -> Option<SyncNotice> {
        if Some(state.slot) == self.slot {
            log::debug!("Ignoring state frame for own slot {:?}", state.slot);
            self.dropped_frames += 1;
            return None;
        }
        self.opponent = Some(OpponentTransform {
            slot: state.slot,
            position: state.position(),
            rotation: state.rot,
            received_frame: frame,
        });
        None
    }

    fn lose_connection(&mut self) -> Option<SyncNotice> {
        let was_connected = self.connected;
        self.connected = false;
        self.opponent = None;
        self.players = self.players.saturating_sub(1);
        was_connected.then_some(SyncNotice::ConnectionLost)
    }

    fn drop_frame(&mut self, err: &ProtocolError) {
        self.dropped_frames += 1;
        log::debug!("Dropped inbound frame: {}", err);
    }

    pub fn publish(&mut self, position: Vec3, rotation: f32) -> bool {
        let Some(slot) = self.slot.filter(|_| self.connected) else {
            return false;
        };
        self.outbox
            .retain(|message| !matches!(message, SignalMessage::State(_)));
        self.outbox
            .push(SignalMessage::State(PeerState::new(slot, position, rotation)));
        true
    }

    pub fn drain_outbox(&mut self) -> Vec<SignalMessage> {
        std::mem::take(&mut self.outbox)
    }

    pub fn disconnect(&mut self) {
        self.slot = None;
        self.room_id = None;
        self.players = 0;
        self.connected = false;
        self.opponent = None;
        self.outbox.clear();
    }
}

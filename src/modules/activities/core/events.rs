#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ParticipantSignedUp {
    pub activity_name: String,
    pub email: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ParticipantUnregistered {
    pub activity_name: String,
    pub email: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    ParticipantSignedUp(ParticipantSignedUp),
    ParticipantUnregistered(ParticipantUnregistered),
}

impl ActivityEvent {
    pub fn activity_name(&self) -> &str {
        match self {
            ActivityEvent::ParticipantSignedUp(e) => &e.activity_name,
            ActivityEvent::ParticipantUnregistered(e) => &e.activity_name,
        }
    }
}

use serde::Serialize;

/// One extracurricular offering. The activity name is the store key and is not
/// repeated inside the record, so serializing the whole map yields the wire
/// shape of `GET /activities` directly.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order, each at most once.
    pub participants: Vec<String>,
}

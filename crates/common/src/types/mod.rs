use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by the API root.
#[derive(Serialize, Debug)]
pub struct RootMessage {
    pub message: &'static str,
}

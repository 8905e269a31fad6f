#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is at full capacity")]
    AtCapacity,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("activity {activity:?} must allow at least one participant")]
    ZeroCapacity { activity: String },

    #[error("activity {activity:?} has {participants} participants but room for {max_participants}")]
    OverCapacity {
        activity: String,
        participants: usize,
        max_participants: usize,
    },

    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },

    #[error("activity {activity:?} is seeded more than once")]
    DuplicateActivity { activity: String },
}

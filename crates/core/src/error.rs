use crate::entity::EntityRef;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0} does not exist")]
    NotFound(EntityRef),

    #[error("{0} already exists")]
    Conflict(EntityRef),

    /// A store write reported no effect, or the store call itself failed,
    /// after every precondition passed.
    #[error("{0}. Database request failed")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_message() {
        let err = CoreError::NotFound(EntityRef::project("awesome"));
        assert_eq!(err.to_string(), "project \"awesome\" does not exist");
    }

    #[test]
    fn conflict_message() {
        let err = CoreError::Conflict(EntityRef::board("awesome", "todo"));
        assert_eq!(
            err.to_string(),
            "board \"todo\" inside project \"awesome\" already exists"
        );
    }

    #[test]
    fn store_message() {
        let err = CoreError::Store("couldn't delete project \"awesome\"".into());
        assert_eq!(
            err.to_string(),
            "couldn't delete project \"awesome\". Database request failed"
        );
        assert_matches!(err, CoreError::Store(_));
    }
}

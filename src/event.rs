use super::*;

pub(crate) enum Event {
  Context {
    request_id: u64,
    result: Result<CommentsResponse>,
  },
  Status {
    request_id: u64,
    result: Result<Comment>,
  },
}

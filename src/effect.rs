#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchContext { request_id: u64, url: String },
  FetchStatus { request_id: u64, url: String },
}

mod requests;

pub use requests::{PostInput, SignInRequest, SignUpRequest};

//! External collaborators: identity and language-model completion.

pub mod completion;
pub mod identity;

pub use completion::{build_prompt, parse_completion, CannedCompletion, CompletionBackend};
pub use identity::{IdentityProvider, LocalIdentity, MIN_PASSWORD_LEN};

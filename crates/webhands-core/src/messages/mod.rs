//! Model-facing message text.

mod i18n;
mod untrusted;

pub use i18n::{DefaultMessages, format_message, keys};
pub use untrusted::{
    UNTRUSTED_CONTENT_TAG, USER_REQUEST_TAG, wrap_untrusted_content, wrap_user_request,
};

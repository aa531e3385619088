//! ChatView trait -- the seam between widget logic and a concrete display.

use labchat_types::chat::ChatMessage;

/// Identifies one loading indicator inserted into a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadingHandle(pub u64);

/// A scrollable chat transcript display.
///
/// Implementations must keep the newest entry visible after every insertion.
pub trait ChatView {
    /// Append a message. User content is literal text; bot content is
    /// trusted markup.
    fn append_message(&mut self, message: &ChatMessage);

    /// Insert the animated "thinking" placeholder.
    fn append_loading_indicator(&mut self) -> LoadingHandle;

    /// Remove a placeholder. A no-op when it is already gone.
    fn remove_loading_indicator(&mut self, handle: LoadingHandle);
}

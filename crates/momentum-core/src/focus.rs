/// The single free-text focus goal. Editing happens in a buffer owned by
/// the view; leaving edit mode commits whatever the buffer holds, so there
/// is deliberately no cancel operation here.
#[derive(Debug, Default)]
pub struct FocusGoal {
    text: String,
}

impl FocusGoal {
    pub const VIEW_PLACEHOLDER: &'static str = "Click to set your main goal for today...";
    pub const EDIT_PLACEHOLDER: &'static str = "What's your main focus today?";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_set(&self) -> bool {
        !self.text.is_empty()
    }

    /// Seed for the edit buffer when entering edit mode.
    pub fn edit_seed(&self) -> String {
        self.text.clone()
    }

    pub fn commit(&mut self, buffer: String) {
        self.text = buffer;
    }
}

// Defines the side effects a key or mouse event can ask the main loop for.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenLink(String),
    Reload,
    Quit,
}

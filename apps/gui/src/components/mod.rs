mod chapter_list;
mod search_bar;
mod status_bar;

pub use chapter_list::{ChapterList, ChapterListEvent, ChapterListProps};
pub use search_bar::{SearchBar, SearchBarEvent, SearchBarProps};
pub use status_bar::{StatusBar, StatusBarProps, StatusKind};

pub mod prelude {
    pub use super::ContextComponent;
}

/// A component that owns one top-level panel of the window.
pub trait ContextComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output;
}

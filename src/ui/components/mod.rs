mod text_area;

pub use text_area::{TextArea, render_text_area};

pub mod renderer;
pub mod style;

pub use renderer::{envelope, render_body, render_token};
pub use style::Style;

mod apply_theme;

pub use apply_theme::{ResolveTheme, ToggleTheme};

pub mod rich_text;
pub mod slide;
pub mod visual;

pub mod html;
pub mod token;
pub mod webutils;

// Presentation layer: a line-oriented terminal front end over FormSession.

pub mod terminal;

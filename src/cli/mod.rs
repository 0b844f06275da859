pub use self::args::{Args, ColorChoice, Command};

mod args;

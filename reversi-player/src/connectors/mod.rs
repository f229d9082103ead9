//! Connectors let a player take part in a game, whether typing at a terminal
//! or computed by a [`Strategy`](crate::Strategy).

mod computer;
mod connector;
mod console;

pub use computer::ComputerConnector;
pub use connector::Connector;
pub use console::ConsoleConnector;

pub mod config;
pub mod logging;

pub mod checksum;
pub mod descriptor;
pub mod site;
pub mod transport;

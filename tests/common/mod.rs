pub mod external_server;
pub mod football_server;

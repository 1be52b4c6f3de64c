pub mod server;

/// Actions dispatched from the command line
#[derive(Debug)]
pub enum Action {
    Server { port: u16, dsn: String },
}

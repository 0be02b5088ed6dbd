pub mod server;

/// Work selected on the command line. The service has a single mode today.
#[derive(Debug)]
pub enum Action {
    Server(server::Args),
}

impl Action {
    /// Run the action to completion.
    /// # Errors
    /// Returns whatever error the underlying action reports.
    pub async fn execute(self) -> anyhow::Result<()> {
        match self {
            Self::Server(args) => server::execute(args).await,
        }
    }
}

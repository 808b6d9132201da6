use anyhow::Result;

use local_notify::cli::CliApp;

fn main() -> Result<()> {
    CliApp::run()
}

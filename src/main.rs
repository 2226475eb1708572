//! worklog main entrypoint.

use worklog::run;
use worklog::ui::messages::error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error(e.user_message());
        std::process::exit(1);
    }
}

//! Resolve command implementation
//!
//! Resolves owners for a release and prints the report to stdout. Nothing is
//! printed unless the whole run succeeds.

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::operations::{ResolveOperation, ResolveOptions};
use crate::report::write_report;
use crate::temp;
use crate::update::{HttpFetcher, UpdateServer};

/// Run resolve command
pub fn run(server: &UpdateServer, args: ResolveArgs, verbose: bool) -> Result<()> {
    // Held until the report is written, removed on any exit path
    let _working_dir = temp::working_dir()?;

    let fetcher = HttpFetcher::new()?;
    let options = ResolveOptions {
        release: args.release,
        show_progress: !args.no_progress && !verbose,
    };

    let table = ResolveOperation::new(&fetcher, server).execute(&options)?;

    let stdout = std::io::stdout();
    write_report(&table, args.format, &mut stdout.lock())
}

//! Submit one user report.

use ohd_core::controller;
use ohd_core::report::DraftField;
use ohd_core::service::AnalysisService;
use ohd_core::view_state::ViewState;
use std::cell::RefCell;
use std::rc::Rc;

/// Submit a report and print the resulting notification. A failed submission
/// is an error exit, with the same retry message the dashboard shows.
pub async fn run_report<S: AnalysisService>(
    service: &S,
    location: &str,
    text: &str,
) -> anyhow::Result<()> {
    let mut state = Rc::new(RefCell::new(ViewState::new()));
    controller::update_draft(&mut state, DraftField::Location, location);
    controller::update_draft(&mut state, DraftField::Text, text);

    let notification = controller::submit_report(&mut state, service)
        .await
        .ok_or_else(|| anyhow::anyhow!("Both --location and --text must be non-empty"))?;

    if !notification.is_success() {
        anyhow::bail!(notification.message());
    }
    println!("{}", notification.message());
    Ok(())
}

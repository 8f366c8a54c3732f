pub use guardduty_notifier::audio::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    guardduty_notifier::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}

use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    match platform::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!(target: "platform", "event loop failed: {err}");
            ExitCode::FAILURE
        }
    }
}

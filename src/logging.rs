use log::debug;

/// Initialize the logger
pub fn init(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

/// Log an external command invocation at debug level
pub fn log_command(program: &str, args: &[String]) {
    debug!("Running: {} {}", program, args.join(" "));
}

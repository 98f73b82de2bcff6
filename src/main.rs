use tick_schedule::cli;

fn main() {
    if let Err(error) = cli::run_from_env() {
        eprintln!("tick-schedule: {error}");
        std::process::exit(error.exit_code());
    }
}

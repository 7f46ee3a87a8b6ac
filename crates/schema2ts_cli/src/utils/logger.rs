use log::Level;
use std::io::Write;

/// `-q` keeps errors only, `-v` enables debug output from schema2ts crates,
/// `-vv` traces everything.
pub fn init_logger(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => Level::Error,
        (false, 0) => Level::Info,
        (false, 1) => Level::Debug,
        _ => Level::Trace,
    };

    let mut builder = env_logger::builder();

    if level == Level::Trace {
        builder.filter_level(level.to_level_filter());
    } else {
        builder
            .filter_module("schema2ts", level.to_level_filter())
            .format(|buf, record| {
                if record.level() == Level::Info {
                    writeln!(buf, "{}", record.args())
                } else {
                    let log_style = buf.default_level_style(record.level());
                    writeln!(
                        buf,
                        "{log_style}[{}]{log_style:#} {}",
                        record.level(),
                        record.args()
                    )
                }
            });
    }

    let _ = builder.try_init();
}

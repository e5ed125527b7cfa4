use std::fmt::Display;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise the level follows `-v` count.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Records a rejected calculation.
///
/// Logged at `info` since `main` already prints the message to stderr.
pub fn rejected<T, E: Display>(calculator: &str, result: &Result<T, E>) {
    if let Err(err) = result {
        info!(%err, "{calculator} rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_at(directive: &str, log: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, log);
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "trace");
    }

    #[test]
    fn rejections_are_silent_by_default() {
        let result: Result<(), &str> = Err("Dew point cannot be higher than temperature.");

        let quiet = captured_at(default_directive(0), || rejected("cloud base", &result));
        assert!(quiet.is_empty(), "unexpected output: {quiet}");

        let verbose = captured_at(default_directive(1), || rejected("cloud base", &result));
        assert!(verbose.contains("cloud base rejected"));
    }

    #[test]
    fn successes_are_not_logged() {
        let result: Result<(), &str> = Ok(());
        let output = captured_at("trace", || rejected("turbulence", &result));
        assert!(output.is_empty());
    }
}

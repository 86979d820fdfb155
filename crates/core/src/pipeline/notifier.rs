/// Caller-supplied sink for user-facing notifications about a pass.
///
/// Keeps the pipeline free of any particular UI: the CLI logs, a GUI could
/// show a toast, tests record or discard.
pub trait Notifier: Send {
    /// At least one face was found.
    fn faces_detected(&mut self, count: usize);

    /// No faces were found; the output equals the input.
    fn no_faces(&mut self);
}

/// Discards all notifications.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn faces_detected(&mut self, _count: usize) {}
    fn no_faces(&mut self) {}
}

/// Reports through the `log` facade. Holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn faces_detected(&mut self, count: usize) {
        log::info!("{}", faces_message(count));
    }

    fn no_faces(&mut self) {
        log::warn!("{NO_FACES_MESSAGE}");
    }
}

const NO_FACES_MESSAGE: &str = "No faces found in the picture";

fn faces_message(count: usize) -> String {
    format!("Number of faces: {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_notifier_is_noop() {
        let mut n = NullNotifier;
        n.faces_detected(3);
        n.no_faces();
    }

    #[test]
    fn test_log_notifier_is_stateless() {
        let mut n = LogNotifier;
        for count in 1..=1000 {
            n.faces_detected(count);
            n.no_faces();
        }
        assert_eq!(std::mem::size_of::<LogNotifier>(), 0);
    }

    #[test]
    fn test_faces_message_includes_count() {
        assert_eq!(faces_message(2), "Number of faces: 2");
    }
}

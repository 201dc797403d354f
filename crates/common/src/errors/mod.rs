//! Commonly used errors.

mod fs;
pub use fs::FsPathError;

mod private {
    use eyre::Chain;
    use std::error::Error;

    pub trait ErrorChain {
        fn chain(&self) -> Chain<'_>;
    }

    impl ErrorChain for dyn Error + 'static {
        fn chain(&self) -> Chain<'_> {
            Chain::new(self)
        }
    }

    impl ErrorChain for eyre::Report {
        fn chain(&self) -> Chain<'_> {
            self.chain()
        }
    }
}

/// Displays a chain of errors in a single line.
pub fn display_chain<E: private::ErrorChain + ?Sized>(error: &E) -> String {
    dedup_chain(error).join("; ")
}

/// Deduplicates a chain of errors.
pub fn dedup_chain<E: private::ErrorChain + ?Sized>(error: &E) -> Vec<String> {
    let mut causes: Vec<_> =
        error.chain().map(|cause| cause.to_string().trim().to_string()).collect();
    // Deduplicate the common pattern `msg1: msg2; msg2` -> `msg1: msg2`.
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_wrapped_io_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let report = eyre::Report::from(io).wrap_err("reading input: disk on fire");
        assert_eq!(display_chain(&report), "reading input: disk on fire");
    }

    #[test]
    fn keeps_distinct_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "inner");
        let report = eyre::Report::from(io).wrap_err("outer");
        assert_eq!(display_chain(&report), "outer; inner");
    }
}

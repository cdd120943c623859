pub struct Config {
    /// Hides prompts and section headers.
    ///
    /// Lifecycle lines and display output are still printed.
    pub quiet: bool,
    /// Raises the log filter to DEBUG unless `RUST_LOG` says otherwise.
    pub verbose: bool,
    pub no_color: bool,
}

/// Sink for everything the showroom shows.
pub trait Console {
    fn line(&mut self, msg: &str);
    fn section(&mut self, title: &str);
}

/// Plain transcript, one entry per line. Sections are kept as `--- title ---`.
impl Console for Vec<String> {
    fn line(&mut self, msg: &str) {
        self.push(msg.to_string());
    }

    fn section(&mut self, title: &str) {
        self.push(format!("--- {title} ---"));
    }
}

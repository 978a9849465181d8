/// Navigation sink - where mailto URIs are handed off.
/// In a browser this is `location.href`; the demo logs the URI and tests
/// record it.
pub trait Navigator {
    fn navigate(&mut self, uri: &str);
}

/// Navigator that remembers every URI it was asked to open
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, uri: &str) {
        self.visited.push(uri.to_string());
    }
}

pub(crate) const TEST_NUMBER_TOKEN: &str = "[test_number]";
pub(crate) const THREAD_NUMBER_TOKEN: &str = "[thread_number]";

/// Per-request values substituted into every templated field.
#[derive(Debug, Clone)]
pub(crate) struct RequestVars {
    test_number: String,
    thread_number: String,
}

impl RequestVars {
    pub(crate) fn new(test_number: usize, thread_number: usize) -> Self {
        Self {
            test_number: test_number.to_string(),
            thread_number: thread_number.to_string(),
        }
    }

    /// Replaces `[test_number]` first, then `[thread_number]`.
    ///
    /// Plain text replacement with no escaping; the substituted digits can
    /// never form another token.
    pub(crate) fn render(&self, input: &str) -> String {
        render_vars(input, &self.test_number, &self.thread_number)
    }
}

pub(crate) fn render_vars(input: &str, test_number: &str, thread_number: &str) -> String {
    if !input.contains('[') {
        return input.to_owned();
    }
    input
        .replace(TEST_NUMBER_TOKEN, test_number)
        .replace(THREAD_NUMBER_TOKEN, thread_number)
}

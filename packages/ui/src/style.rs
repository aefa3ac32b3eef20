/// Inline styles for the student list, passed to the view as a prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListStyle {
    pub summary_button: &'static str,
    pub summary_text: &'static str,
    pub page_button: &'static str,
}

impl ListStyle {
    pub const DEFAULT: ListStyle = ListStyle {
        summary_button: "margin-left: 10px; background: #3498db; color: white; \
                         padding: 5px 10px; border: none; border-radius: 5px; cursor: pointer;",
        summary_text: "margin: 0.25rem 0; white-space: pre-wrap;",
        page_button: "margin: 0 0.25rem; padding: 5px 12px;",
    };
}

impl Default for ListStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

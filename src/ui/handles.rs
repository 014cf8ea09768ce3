/// The search input box.
pub trait InputHandle {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: &str);
}

/// The container the result views are written into.
pub trait ResultsHandle {
    fn html(&self) -> &str;
    /// Replaces the whole content.
    fn set_html(&mut self, html: String);
}

#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl InputHandle for TextInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

#[derive(Debug, Default, Clone)]
pub struct ResultsArea {
    html: String,
}

impl ResultsHandle for ResultsArea {
    fn html(&self) -> &str {
        &self.html
    }

    fn set_html(&mut self, html: String) {
        self.html = html;
    }
}

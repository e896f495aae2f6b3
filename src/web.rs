//! [`Dom`] backed by the live page.
//!
//! This module is the only place that touches [`web_sys`]. DOM exceptions are
//! mapped into [`MarkError::Dom`] through `From<JsValue>`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{Dom, PageMetrics};
use crate::error::MarkError;

pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to the global `window` and its document.
    ///
    /// # Errors
    ///
    /// [`MarkError::NoWindow`] outside a page, [`MarkError::NoDocument`] in a worker.
    pub fn from_window() -> Result<Self, MarkError> {
        let window = web_sys::window().ok_or(MarkError::NoWindow)?;
        let document = window.document().ok_or(MarkError::NoDocument)?;
        Ok(Self { window, document })
    }

    fn body(&self) -> Result<HtmlElement, MarkError> {
        self.document.body().ok_or(MarkError::NoBody)
    }

    fn viewport(value: Result<JsValue, JsValue>, name: &str) -> Result<f64, MarkError> {
        value?.as_f64().ok_or_else(|| MarkError::Dom(format!("window.{name} is not a number")))
    }
}

impl Dom for WebDom {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Result<Option<HtmlElement>, MarkError> {
        match self.document.get_element_by_id(id) {
            Some(el) => el
                .dyn_into::<HtmlElement>()
                .map(Some)
                .map_err(|_| MarkError::Dom(format!("#{id} is not an HTML element"))),
            None => Ok(None),
        }
    }

    fn create_element(&self, tag: &str) -> Result<HtmlElement, MarkError> {
        self.document
            .create_element(tag)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MarkError::Dom(format!("<{tag}> is not an HTML element")))
    }

    fn set_id(&self, el: &HtmlElement, id: &str) -> Result<(), MarkError> {
        el.set_id(id);
        Ok(())
    }

    fn set_style(&self, el: &HtmlElement, property: &str, value: &str) -> Result<(), MarkError> {
        el.style().set_property(property, value).map_err(MarkError::from)
    }

    fn set_text(&self, el: &HtmlElement, text: &str) -> Result<(), MarkError> {
        el.set_text_content(Some(text));
        Ok(())
    }

    fn append_to_body(&self, el: &HtmlElement) -> Result<(), MarkError> {
        self.body()?.append_child(el)?;
        Ok(())
    }

    fn append_to_head(&self, el: &HtmlElement) -> Result<(), MarkError> {
        match self.document.head() {
            Some(head) => {
                head.append_child(el)?;
                Ok(())
            }
            None => self.append_to_body(el),
        }
    }

    fn remove(&self, el: &HtmlElement) {
        el.remove();
    }

    fn metrics(&self) -> Result<PageMetrics, MarkError> {
        let body = self.body()?;
        Ok(PageMetrics {
            scroll_width: f64::from(body.scroll_width()),
            scroll_height: f64::from(body.scroll_height()),
            inner_width: Self::viewport(self.window.inner_width(), "innerWidth")?,
            inner_height: Self::viewport(self.window.inner_height(), "innerHeight")?,
        })
    }
}
